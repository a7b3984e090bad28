//! View seam between the controller and whatever renders it.
//!
//! UI handles are injected into the controller instead of being looked up
//! globally, so tests can substitute a recording view.

use std::io::Write;
use std::time::Duration;

use cxr_common::{Label, Prediction};

/// Server status badge states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    ModelLoaded,
    ModelNotLoaded,
    Offline,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Badge::ModelLoaded => "Model loaded",
            Badge::ModelNotLoaded => "Model not loaded",
            Badge::Offline => "Offline",
        }
    }
}

/// What the preview pane shows about a selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub file_name: String,
    pub size_bytes: u64,
    /// Present when the file decoded locally; the server remains the decode
    /// authority either way.
    pub dimensions: Option<(u32, u32)>,
}

/// Rendering surface driven by the controller.
pub trait View: Send + Sync {
    fn show_preview(&self, preview: &Preview);
    fn set_loading(&self, loading: bool);
    fn show_result(&self, prediction: &Prediction);
    fn show_error(&self, message: &str);
    fn set_badge(&self, badge: Badge);
}

/// Terminal renderer used by the CLI binary.
pub struct TerminalView {
    /// Frame delay for the bar animation; zero disables animation.
    frame_delay: Duration,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            frame_delay: Duration::from_millis(8),
        }
    }

    pub fn without_animation() -> Self {
        Self {
            frame_delay: Duration::ZERO,
        }
    }

    fn draw_bar(&self, label: Label, percent: f64) {
        const WIDTH: usize = 40;
        let target = ((percent / 100.0) * WIDTH as f64).round() as usize;
        let mut out = std::io::stdout();

        // Grow the bar from zero to its target width.
        for filled in 0..=target {
            let _ = write!(
                out,
                "\r  {:<10} [{:<WIDTH$}] {:>5.1}%",
                label.as_str(),
                "#".repeat(filled),
                percent
            );
            let _ = out.flush();
            if !self.frame_delay.is_zero() {
                std::thread::sleep(self.frame_delay);
            }
        }
        println!();
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for TerminalView {
    fn show_preview(&self, preview: &Preview) {
        match preview.dimensions {
            Some((width, height)) => println!(
                "Selected {} ({} bytes, {}x{})",
                preview.file_name, preview.size_bytes, width, height
            ),
            None => println!("Selected {} ({} bytes)", preview.file_name, preview.size_bytes),
        }
    }

    fn set_loading(&self, loading: bool) {
        if loading {
            println!("Analyzing...");
        }
    }

    fn show_result(&self, prediction: &Prediction) {
        println!("Prediction: {}", prediction.predicted_class);
        println!("Confidence: {:.1}%", prediction.confidence);
        for label in Label::ALL {
            let percent = prediction
                .probabilities
                .get(&label)
                .copied()
                .unwrap_or(0.0);
            self.draw_bar(label, percent);
        }
        if let Some(note) = &prediction.note {
            println!("({})", note);
        }
    }

    fn show_error(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn set_badge(&self, badge: Badge) {
        println!("Server: {}", badge.label());
    }
}
