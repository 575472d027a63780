//! Interactive session holding one point collection in memory.
//!
//! Mirrors the buttons of a point editor: create, sort, save, load and show.
//! A failed action never replaces the collection already held.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context};
use pointcodec::{CodecConfig, GenerationRange, PointCollection};
use rand::Rng;

use crate::settings::Settings;
use crate::storage;

const HELP: &str = "\
commands:
  create [n]    generate n random points (default from settings)
  sort          sort the current points
  save <path>   store the points; the extension picks the format
  load <path>   replace the points with the contents of a file
  show          list the current points
  help          print this message
  quit          leave the shell";

/// Result of one shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to print before reading the next command.
    Continue(String),
    Quit,
}

#[derive(Debug)]
pub struct Session {
    points: Option<PointCollection>,
    config: CodecConfig,
    range: GenerationRange,
    default_count: usize,
}

impl Session {
    pub fn new(settings: &Settings) -> Self {
        Self {
            points: None,
            config: settings.codec_config(),
            range: settings.generation_range(),
            default_count: settings.count,
        }
    }

    pub fn points(&self) -> Option<&PointCollection> {
        self.points.as_ref()
    }

    pub fn create(&mut self, count: usize) -> &PointCollection {
        self.create_with(count, &mut rand::thread_rng())
    }

    pub fn create_with<R: Rng>(&mut self, count: usize, rng: &mut R) -> &PointCollection {
        self.points.insert(PointCollection::generate_with(count, &self.range, rng))
    }

    /// Sort the held points. Without points this does nothing.
    pub fn sort(&mut self) -> Option<&PointCollection> {
        let points = self.points.as_mut()?;
        points.sort_in_place();
        Some(&*points)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let Some(points) = &self.points else {
            bail!("nothing to save; create or load points first");
        };
        storage::save(path, points, &self.config).with_context(|| format!("failed to save {}", path.display()))
    }

    /// Replace the held points with the file's contents, only on success.
    pub fn load(&mut self, path: &Path) -> anyhow::Result<&PointCollection> {
        let loaded =
            storage::load(path, &self.config).with_context(|| format!("failed to load {}", path.display()))?;
        Ok(&*self.points.insert(loaded))
    }

    /// Run one command line.
    pub fn execute(&mut self, line: &str) -> anyhow::Result<Outcome> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Outcome::Continue(String::new()));
        };
        let argument = words.next();

        let message = match command {
            "create" => {
                let count = match argument {
                    Some(text) => text.parse::<usize>().with_context(|| format!("invalid count {:?}", text))?,
                    None => self.default_count,
                };
                self.create(count).to_string()
            }
            "sort" => match self.sort() {
                Some(points) => points.to_string(),
                None => String::new(),
            },
            "save" => {
                let path = argument.context("usage: save <path>")?;
                self.save(Path::new(path))?;
                format!("saved {}", path)
            }
            "load" => {
                let path = argument.context("usage: load <path>")?;
                self.load(Path::new(path))?.to_string()
            }
            "show" => self.points.as_ref().map(ToString::to_string).unwrap_or_default(),
            "help" => HELP.to_string(),
            "quit" | "exit" => return Ok(Outcome::Quit),
            other => bail!("unknown command {:?}; try help", other),
        };
        Ok(Outcome::Continue(message))
    }

    /// Read commands from `input` until it ends or `quit` is entered.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<()> {
        write!(output, "> ")?;
        output.flush()?;
        for line in input.lines() {
            match self.execute(&line?) {
                Ok(Outcome::Quit) => break,
                Ok(Outcome::Continue(message)) => write!(output, "{}", with_newline(&message))?,
                Err(e) => {
                    tracing::debug!(error = ?e, "shell command failed");
                    writeln!(output, "error: {:#}", e)?;
                }
            }
            write!(output, "> ")?;
            output.flush()?;
        }
        Ok(())
    }
}

fn with_newline(message: &str) -> String {
    if message.is_empty() || message.ends_with('\n') {
        message.to_string()
    } else {
        format!("{}\n", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> Session {
        Session::new(&Settings::default())
    }

    #[test]
    fn test_create_and_sort() {
        let mut session = session();
        assert!(session.sort().is_none());

        let created = session.create_with(8, &mut StdRng::seed_from_u64(3)).clone();
        assert_eq!(created.len(), 8);

        let sorted = session.sort().unwrap();
        let mut expected = created.into_points();
        expected.sort();
        assert_eq!(sorted.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_save_without_points_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = session().save(&dir.path().join("points.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_failed_load_keeps_points() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.yaml");
        std::fs::write(&broken, "- !Vector\n  x: 1\n").unwrap();
        let notes = dir.path().join("notes.yaml");
        std::fs::write(&notes, "# nothing saved\n").unwrap();

        let mut session = session();
        let created = session.create(5).clone();

        assert!(session.load(&broken).is_err());
        assert!(session.load(&notes).is_err());
        assert!(session.load(&dir.path().join("points.txt")).is_err());
        assert_eq!(session.points(), Some(&created));
    }

    #[test]
    fn test_save_and_load_through_commands() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.soap");
        let path = path.to_str().unwrap();

        let mut session = session();
        session.execute("create 4").unwrap();
        let saved = session.points().cloned().unwrap();
        assert_eq!(session.execute(&format!("save {}", path)).unwrap(), Outcome::Continue(format!("saved {}", path)));

        session.execute("create 2").unwrap();
        session.execute(&format!("load {}", path)).unwrap();
        assert_eq!(session.points(), Some(&saved));
    }

    #[test]
    fn test_command_errors() {
        let mut session = session();
        assert!(session.execute("create many").is_err());
        assert!(session.execute("save").is_err());
        assert!(session.execute("fly").is_err());
        assert_eq!(session.execute("   ").unwrap(), Outcome::Continue(String::new()));
        assert_eq!(session.execute("quit").unwrap(), Outcome::Quit);
    }

    #[test]
    fn test_run_loop_reports_errors_and_stops_on_quit() {
        let mut session = session();
        let input = "create 3\nsort\nbogus\nquit\ncreate 1\n";
        let mut output = Vec::new();

        session.run(input.as_bytes(), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("error: unknown command \"bogus\""));
        assert_eq!(session.points().map(PointCollection::len), Some(3));
    }
}
