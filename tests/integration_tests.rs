// tests/integration_tests.rs
//! Integration tests for the point codecs

use pointcodec::{
    decode, decode_with, encode, encode_with, CodecConfig, DecodeError, GenerationRange, Point, Point3D,
    PointCollection, PointFormat, PointVariant,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn mixed() -> PointCollection {
    PointCollection::from_points(vec![
        Point::new(1, 2).into(),
        Point3D::new(3, 4, 5).into(),
        Point3D::new(0, 0, 0).into(),
        Point::new(-7, 9).into(),
        Point3D::new(i32::MIN, i32::MAX, -1).into(),
    ])
}

fn random_collections() -> Vec<PointCollection> {
    let mut rng = StdRng::seed_from_u64(2024);
    [0usize, 1, 2, 5, 17, 64]
        .iter()
        .map(|&count| PointCollection::generate_with(count, &GenerationRange::new(-3, 3), &mut rng))
        .collect()
}

/// Every 3D point on the z = 0 plane collapses to a plain point.
fn flatten_zero_z(collection: &PointCollection) -> PointCollection {
    collection
        .iter()
        .map(|point| match point {
            PointVariant::Point3D(p) if p.z == 0 => PointVariant::Point(p.planar()),
            other => *other,
        })
        .collect()
}

#[test]
fn test_lossless_formats_roundtrip_exactly() {
    for format in PointFormat::all().into_iter().filter(|f| f.is_lossless()) {
        for config in [CodecConfig::default(), CodecConfig::compact()] {
            let mut inputs = random_collections();
            inputs.push(mixed());

            for input in inputs {
                let bytes = encode_with(&input, format, &config).unwrap();
                let output = decode_with(&bytes, format, &config).unwrap();
                assert_eq!(output, input, "{} round-trip changed the points", format);
            }
        }
    }
}

#[test]
fn test_custom_roundtrip_is_lossy_only_for_zero_z() {
    let mut inputs = random_collections();
    inputs.push(mixed());

    for input in inputs {
        let bytes = encode(&input, PointFormat::Custom).unwrap();
        let output = decode(&bytes, PointFormat::Custom).unwrap();
        assert_eq!(output, flatten_zero_z(&input));

        // a second pass changes nothing
        let again = decode(&encode(&output, PointFormat::Custom).unwrap(), PointFormat::Custom).unwrap();
        assert_eq!(again, output);
    }
}

#[test]
fn test_sort_is_idempotent_and_total() {
    for mut collection in random_collections() {
        let original = collection.clone();
        collection.sort_in_place();
        let once = collection.clone();
        collection.sort_in_place();

        assert_eq!(collection, once);
        assert_eq!(collection.len(), original.len());
        assert!(collection.as_slice().windows(2).all(|w| w[0] <= w[1]));

        // same multiset of elements
        let mut expected = original.into_points();
        expected.sort();
        assert_eq!(collection.into_points(), expected);
    }
}

#[test]
fn test_sort_places_point_before_flat_point3d() {
    let mut collection = PointCollection::from_points(vec![
        Point3D::new(1, 2, 0).into(),
        Point::new(1, 2).into(),
        Point3D::new(1, 2, -5).into(),
        Point::new(0, 100).into(),
    ]);
    collection.sort_in_place();

    let expected: Vec<PointVariant> = vec![
        Point::new(0, 100).into(),
        Point3D::new(1, 2, -5).into(),
        Point::new(1, 2).into(),
        Point3D::new(1, 2, 0).into(),
    ];
    assert_eq!(collection.into_points(), expected);
}

#[test]
fn test_custom_skips_malformed_lines() {
    let points = decode(b"X;Y;Z\nbad;line\n1;2;3", PointFormat::Custom).unwrap();
    assert_eq!(points.into_points(), vec![PointVariant::from(Point3D::new(1, 2, 3))]);
}

#[test]
fn test_custom_strict_mode_fails_on_malformed_lines() {
    let result = decode_with(b"X;Y;Z\nbad;line\n1;2;3", PointFormat::Custom, &CodecConfig::strict());
    assert!(matches!(result, Err(DecodeError::MalformedLine { line: 2, .. })));
}

#[test]
fn test_empty_sequence_roundtrips_for_every_format() {
    let empty = PointCollection::default();
    for format in PointFormat::all() {
        let bytes = encode(&empty, format).unwrap();
        assert!(!bytes.is_empty(), "{} produced an empty stream", format);
        let decoded = decode(&bytes, format).unwrap();
        assert!(decoded.is_empty(), "{} decoded points from nothing", format);
    }
}

#[test]
fn test_json_mixed_scenario() {
    let input = PointCollection::from_points(vec![Point::new(1, 2).into(), Point3D::new(3, 4, 5).into()]);
    let bytes = encode(&input, PointFormat::Json).unwrap();
    let result = decode(&bytes, PointFormat::Json).unwrap();

    match result.as_slice() {
        [PointVariant::Point(first), PointVariant::Point3D(second)] => {
            assert_eq!((first.x, first.y), (1, 2));
            assert_eq!((second.x, second.y, second.z), (3, 4, 5));
        }
        other => panic!("unexpected shapes: {:?}", other),
    }
}

#[test]
fn test_custom_flat_point3d_scenario() {
    let input = PointCollection::from_points(vec![Point3D::new(0, 0, 0).into()]);
    let bytes = encode(&input, PointFormat::Custom).unwrap();
    assert_eq!(bytes, b"X;Y;Z\n0;0;0\n");

    let result = decode(&bytes, PointFormat::Custom).unwrap();
    assert_eq!(result.into_points(), vec![PointVariant::from(Point::new(0, 0))]);
}

#[test]
fn test_formats_do_not_read_each_other() {
    let input = mixed();
    for written in PointFormat::all() {
        let bytes = encode(&input, written).unwrap();
        for read in PointFormat::all() {
            if read == written {
                continue;
            }
            let result = decode(&bytes, read);
            // the text formats may tolerate foreign input, but never reproduce it
            if let Ok(points) = result {
                assert_ne!(points, input, "{} stream decoded as {}", written, read);
            }
        }
    }
}

#[test]
fn test_garbage_is_rejected_by_structured_formats() {
    for format in [PointFormat::Binary, PointFormat::Soap, PointFormat::Xml, PointFormat::Json, PointFormat::Yaml] {
        let result = decode(b"\x01\x02not a point stream", format);
        assert!(result.is_err(), "{} accepted garbage", format);
    }
}
