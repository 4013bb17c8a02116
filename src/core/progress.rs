use std::io::{self, Write};
use std::time::Instant;

const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

/// Minimum wall-clock gap between two console repaints.
const SAMPLE_INTERVAL_SECS: f64 = 1.0;

/// Progress/speed/ETA readout for a streamed transfer.
///
/// Constructed once before the transfer begins; `update` takes the running
/// byte count and repaints a single console line at most once per second.
pub struct TransferReporter {
    total_size: Option<u64>,
    started_at: Instant,
    last_sample_at: Instant,
    bytes_at_last_sample: u64,
}

impl TransferReporter {
    /// A missing or zero `total_size` means the server did not report a
    /// usable content length; the reporter then runs in indeterminate mode
    /// and never prints a percentage or an ETA.
    pub fn new(total_size: Option<u64>) -> Self {
        let now = Instant::now();
        TransferReporter {
            total_size: total_size.filter(|&total| total > 0),
            started_at: now,
            last_sample_at: now,
            bytes_at_last_sample: 0,
        }
    }

    /// Records the running byte count and, once at least one second has
    /// passed since the previous sample, computes the rate over that window
    /// and repaints the progress line.
    pub fn update(&mut self, bytes_transferred: u64) {
        let now = Instant::now();
        let since_sample = now.duration_since(self.last_sample_at).as_secs_f64();
        if since_sample < SAMPLE_INTERVAL_SECS {
            return;
        }

        let rate = (bytes_transferred - self.bytes_at_last_sample) as f64 / since_sample;
        self.last_sample_at = now;
        self.bytes_at_last_sample = bytes_transferred;

        let elapsed = now.duration_since(self.started_at).as_secs_f64();
        print!(
            "\r{}",
            render_progress(bytes_transferred, self.total_size, rate, elapsed)
        );
        let _ = io::stdout().flush();
    }

    /// Paints the final progress line, rating the whole transfer by its
    /// average throughput, and moves the cursor to a fresh row.
    pub fn finish(&self, bytes_transferred: u64) {
        let elapsed = self.started_at.elapsed().as_secs_f64();
        let rate = if elapsed > 0.0 {
            bytes_transferred as f64 / elapsed
        } else {
            0.0
        };
        println!(
            "\r{}",
            render_progress(bytes_transferred, self.total_size, rate, elapsed)
        );
    }
}

pub fn render_progress(
    downloaded: u64,
    total_size: Option<u64>,
    rate: f64,
    elapsed_secs: f64,
) -> String {
    match total_size {
        Some(total) => format!(
            "{:.1}% | {} | {} | {}",
            percentage(downloaded, total),
            format_size_pair(downloaded, total),
            format_rate(rate),
            format_eta(downloaded, total, elapsed_secs),
        ),
        None => format!(
            "{} downloaded | {} | ETA: unknown",
            format_size(downloaded),
            format_rate(rate),
        ),
    }
}

/// Percent complete, clamped so a final chunk overshooting the declared
/// total never reads above 100.
pub fn percentage(downloaded: u64, total_size: u64) -> f64 {
    (downloaded as f64 * 100.0 / total_size as f64).min(100.0)
}

/// `downloaded / total` pair, in KB for totals below 1 MiB and MB above.
/// Both sides use the total's unit so the pair stays comparable.
pub fn format_size_pair(downloaded: u64, total_size: u64) -> String {
    if (total_size as f64) < MIB {
        format!(
            "{:.2} KB / {:.2} KB",
            downloaded as f64 / KIB,
            total_size as f64 / KIB
        )
    } else {
        format!(
            "{:.2} MB / {:.2} MB",
            downloaded as f64 / MIB,
            total_size as f64 / MIB
        )
    }
}

pub fn format_size(bytes: u64) -> String {
    if (bytes as f64) < MIB {
        format!("{:.2} KB", bytes as f64 / KIB)
    } else {
        format!("{:.2} MB", bytes as f64 / MIB)
    }
}

pub fn format_rate(bytes_per_sec: f64) -> String {
    if bytes_per_sec < KIB {
        format!("{bytes_per_sec:.2} B/s")
    } else if bytes_per_sec < MIB {
        format!("{:.2} KB/s", bytes_per_sec / KIB)
    } else {
        format!("{:.2} MB/s", bytes_per_sec / MIB)
    }
}

/// Linear extrapolation from average throughput since the transfer began:
/// project the total duration, then subtract the time already spent.
pub fn format_eta(downloaded: u64, total_size: u64, elapsed_secs: f64) -> String {
    if downloaded == 0 {
        return "ETA: calculating...".to_string();
    }
    let estimated_total = (total_size as f64 / downloaded as f64) * elapsed_secs;
    let remaining = (estimated_total - elapsed_secs).max(0.0);
    format!(
        "ETA: {}m {}s",
        (remaining / 60.0) as u64,
        (remaining % 60.0) as u64
    )
}
