//! Console progress output for tree growth.
use colored::Colorize;

use std::time::{Duration, Instant};


const WIDTH: usize = 8;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;


/// Prints the settings of a build and one line per grown level.
/// Every method is a no-op unless the logger is enabled.
pub(crate) struct GrowthLogger {
    enabled: bool,
    started: Instant,
}


impl GrowthLogger {
    /// Create a new instance of `GrowthLogger`.
    pub(crate) fn new(enabled: bool) -> Self {
        Self { enabled, started: Instant::now() }
    }


    /// Print the current settings and the column header,
    /// then restart the clock.
    pub(crate) fn start(&mut self, info: Vec<(&str, String)>) {
        if !self.enabled { return; }

        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!("\n{header}");
        for (key, val) in info {
            println!(
                "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
                key.bold(),
                val.bold().green(),
            );
        }
        println!("{:=^FULL_WIDTH$}\n", "".bold());

        println!(
            "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "DEPTH".bold().red(),
            "FRONTIER".bold().blue(),
            "CHILDREN".bold().green(),
            "TIME".bold().cyan(),
        );
        self.started = Instant::now();
    }


    /// Print the result of growing the frontier at `depth`.
    pub(crate) fn level(&self, depth: usize, frontier: usize, children: usize) {
        if !self.enabled { return; }

        let time = self.started.elapsed();
        println!(
            "{} {}\t{}\t{}\t{}",
            "[LVL]".bold().magenta(),
            format!("{:>WIDTH$}", depth).red(),
            format!("{:>WIDTH$}", frontier).blue(),
            format!("{:>WIDTH$}", children).green(),
            time_format(time).bold().cyan(),
        );
    }


    /// Print the size of the finished tree.
    pub(crate) fn finish(&self, n_nodes: usize, n_leaves: usize) {
        if !self.enabled { return; }

        let time = self.started.elapsed();
        println!(
            "{} {}\t{}\t{}\n",
            "[FIN]".bold().bright_green(),
            format!("{:>WIDTH$}", n_nodes).bold().blue(),
            format!("{:>WIDTH$}", n_leaves).bold().green(),
            time_format(time).bold().cyan(),
        );
    }
}


/// Elapsed time since `start`, as seconds below one minute
/// and as minutes above.
fn time_format(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs < 60 {
        format!("{secs:>3}.{:0>3}s", elapsed.subsec_millis())
    } else {
        format!("{:>3}m {:0>2}s", secs / 60, secs % 60)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_format_units() {
        let ms = Duration::from_millis;
        assert_eq!(time_format(ms(42)), "  0.042s");
        assert_eq!(time_format(ms(12_500)), " 12.500s");
        assert_eq!(time_format(ms(61_500)), "  1m 01s");
        assert_eq!(time_format(ms(3_600_000)), " 60m 00s");
    }
}
