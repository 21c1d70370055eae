use std::io;
use std::process::{Command, Stdio};
use tracing::{info, warn};

/// Hands a `mailto:` URI to the platform's default handler.
pub struct MailClient {
    program: &'static str,
    args: &'static [&'static str],
}

impl MailClient {
    pub fn for_platform() -> Self {
        if cfg!(target_os = "macos") {
            Self { program: "open", args: &[] }
        } else if cfg!(target_os = "windows") {
            Self { program: "rundll32", args: &["url.dll,FileProtocolHandler"] }
        } else {
            Self { program: "xdg-open", args: &[] }
        }
    }

    pub fn open(&self, uri: &str) -> io::Result<()> {
        let mut process = Command::new(self.program)
            .args(self.args)
            .arg(uri)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        info!(program = self.program, "opened mail client");

        // Reap the opener in the background so it never lingers as a zombie
        std::thread::spawn(move || {
            if let Err(e) = process.wait() {
                warn!("mail client opener did not exit cleanly: {e}");
            }
        });
        Ok(())
    }
}
