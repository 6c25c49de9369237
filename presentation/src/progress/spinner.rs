//! Spinner shown while a story, illustration or chat reply is on its way

use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

/// A spinner line, or nothing when progress display is off
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    pub fn start(message: impl Into<String>, enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Remove the spinner line
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

/// Run `future` while a spinner shows `message`.
pub async fn with_spinner<F>(message: &str, enabled: bool, future: F) -> F::Output
where
    F: Future,
{
    let spinner = Spinner::start(message, enabled);
    let output = future.await;
    spinner.finish();
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_spinner_passes_output_through() {
        let value = with_spinner("Thinking...", false, async { 42 }).await;
        assert_eq!(value, 42);
    }
}
