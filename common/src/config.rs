/// Runtime settings collected from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Suppresses headers and other decoration.
    ///
    /// Result lines are always printed.
    pub quiet: u8,
    /// Log verbosity: 0 is warnings only, 1 adds debug, 2 and up adds trace.
    pub verbose: u8,
}

impl Config {
    pub fn is_quiet(&self) -> bool {
        self.quiet > 0
    }

    /// Filter directive handed to the log subscriber.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn,numkit::print=info",
            1 => "debug",
            _ => "trace",
        }
    }
}
