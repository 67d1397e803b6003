use {
    chrono::{DateTime, Local},
    std::{
        fs::File,
        io::{self, BufReader, Cursor, Read},
        path::PathBuf,
        process::Command,
    },
};

#[cfg(test)]
use std::{cell::RefCell, collections::VecDeque};

pub use self::{clock::*, readable::*};

mod clock {
    use super::*;

    /// a source of wall-clock time.
    pub trait Clock {
        fn now(&self) -> DateTime<Local>;
    }

    #[derive(Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Local> {
            Local::now()
        }
    }

    /// a clock stopped at a single moment.
    #[cfg(test)]
    pub struct FixedClock(pub DateTime<Local>);

    #[cfg(test)]
    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            let Self(time) = self;
            *time
        }
    }
}

/// abstracts over providers of raw metric text.
mod readable {
    use super::*;

    /// something that can be opened and read once per tick.
    pub trait Source {
        /// returns a reader.
        fn open(&self) -> io::Result<impl Read>;

        /// a human-readable name, used in error messages.
        fn label(&self) -> String;
    }

    /// a file in procfs or sysfs.
    #[derive(Clone, Debug)]
    pub struct FileSource {
        path: PathBuf,
    }

    /// the standard output of an external command.
    #[derive(Clone, Debug)]
    pub struct CommandSource {
        program: String,
        args: Vec<String>,
    }

    /// a mock source.
    ///
    /// each call to `open` pops the next entry. `None` behaves like a missing file.
    #[cfg(test)]
    #[derive(Default)]
    pub struct MockSource {
        contents: RefCell<VecDeque<Option<Vec<u8>>>>,
    }

    // === impl FileSource ===

    impl FileSource {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }
    }

    impl Source for FileSource {
        fn open(&self) -> io::Result<impl Read> {
            File::open(&self.path).map(BufReader::new)
        }

        fn label(&self) -> String {
            self.path.display().to_string()
        }
    }

    // === impl CommandSource ===

    impl CommandSource {
        /// builds a source from a program and its arguments.
        ///
        /// returns `None` if `argv` is empty.
        pub fn new(argv: &[String]) -> Option<Self> {
            let [program, args @ ..] = argv else {
                return None;
            };

            Some(Self {
                program: program.to_owned(),
                args: args.to_vec(),
            })
        }
    }

    impl Source for CommandSource {
        fn open(&self) -> io::Result<impl Read> {
            let Self { program, args } = self;

            let output = Command::new(program)
                .args(args)
                .env("LC_ALL", "C")
                .output()?;

            if !output.status.success() {
                return Err(io::Error::other(format!(
                    "`{program}` exited with {}",
                    output.status
                )));
            }

            Ok(Cursor::new(output.stdout))
        }

        fn label(&self) -> String {
            let Self { program, args } = self;
            std::iter::once(program)
                .chain(args)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" ")
        }
    }

    // === impl MockSource ===

    #[cfg(test)]
    impl MockSource {
        pub fn new<I, T>(contents: I) -> Self
        where
            I: IntoIterator<Item = Option<T>>,
            T: Into<Vec<u8>>,
        {
            let contents = contents.into_iter().map(|c| c.map(Into::into)).collect();
            Self {
                contents: RefCell::new(contents),
            }
        }

        /// a source that yields `text` once.
        pub fn once(text: &str) -> Self {
            Self::new([Some(text)])
        }

        /// a source that yields raw `bytes` once, which need not be utf-8.
        pub fn bytes(bytes: &[u8]) -> Self {
            Self::new([Some(bytes)])
        }
    }

    #[cfg(test)]
    impl Source for MockSource {
        fn open(&self) -> io::Result<impl Read> {
            let Self { contents } = self;

            contents
                .borrow_mut()
                .pop_front()
                .expect("mock contents should not be empty")
                .map(Cursor::new)
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }

        fn label(&self) -> String {
            "mock".to_owned()
        }
    }
}
