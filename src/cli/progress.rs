// indicatif progress bar driven by the improvement loop

use indicatif::{ProgressBar, ProgressStyle};

use crate::improve::ProgressNotifier;

pub struct BarNotifier {
    bar: ProgressBar,
}

impl BarNotifier {
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        match ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
        {
            Ok(style) => bar.set_style(style.progress_chars("=>-")),
            Err(e) => tracing::debug!("Using default progress style: {}", e),
        }
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressNotifier for BarNotifier {
    fn notify(&self, iteration: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(iteration.saturating_sub(1) as u64);
        self.bar.set_message(format!("Improving (cycle {iteration}/{total})"));
    }
}
