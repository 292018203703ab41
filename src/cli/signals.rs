//! Interrupt handling
//!
//! The wrapper must survive the first Ctrl+C: the interrupt goes to the
//! whole foreground process group, so the child dies on its own and the
//! wrapper stays alive to report what happened. A second interrupt
//! terminates the wrapper with the conventional 130.

use std::io;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Exit code for death by SIGINT
const EXIT_INTERRUPTED: i32 = 130;

/// Counts interrupts; lives for the whole run
pub struct InterruptGuard {
    count: Arc<AtomicU32>,
}

impl InterruptGuard {
    /// Install the interrupt handler. Must be called from within the
    /// runtime.
    #[cfg(unix)]
    pub fn install() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        let count = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&count);
        let mut sigint = signal(SignalKind::interrupt())?;

        tokio::spawn(async move {
            loop {
                sigint.recv().await;
                let previous = seen.fetch_add(1, Ordering::SeqCst);
                if previous >= 1 {
                    // Second interrupt: stop shielding, terminate
                    std::process::exit(EXIT_INTERRUPTED);
                }
            }
        });

        Ok(Self { count })
    }

    /// Install the interrupt handler. Must be called from within the
    /// runtime.
    #[cfg(not(unix))]
    pub fn install() -> io::Result<Self> {
        let count = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&count);

        tokio::spawn(async move {
            loop {
                if tokio::signal::ctrl_c().await.is_err() {
                    return;
                }
                let previous = seen.fetch_add(1, Ordering::SeqCst);
                if previous >= 1 {
                    std::process::exit(EXIT_INTERRUPTED);
                }
            }
        });

        Ok(Self { count })
    }

    /// Whether at least one interrupt arrived during the run
    pub fn was_interrupted(&self) -> bool {
        self.count.load(Ordering::SeqCst) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[tokio::test]
    async fn first_interrupt_is_counted_not_fatal() {
        use nix::sys::signal::{raise, Signal};

        let guard = InterruptGuard::install().unwrap();
        assert!(!guard.was_interrupted());

        // Give the handler task a chance to register
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        raise(Signal::SIGINT).unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        assert!(guard.was_interrupted());
    }
}
