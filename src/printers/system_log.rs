//! System log writer
//!
//! The delivery mechanism is chosen once when the writer is created: the
//! local syslog socket when one accepts a connection, otherwise stderr. Each
//! write then goes straight to that strategy.

use super::os::{OsLogType, OsWriter};
use crate::core::{LoggerError, Result};
use chrono::{DateTime, Local};
#[cfg(unix)]
use parking_lot::Mutex;
use std::io::Write;
#[cfg(unix)]
use std::os::unix::net::UnixDatagram;

/// `user` facility
const SYSLOG_FACILITY: u8 = 1;

#[cfg(unix)]
const SYSLOG_SOCKET_PATHS: [&str; 3] = ["/dev/log", "/var/run/syslog", "/var/run/log"];

trait WriterStrategy: Send + Sync {
    fn write(&self, subsystem: &str, category: &str, log_type: OsLogType, message: &str)
        -> Result<()>;

    fn name(&self) -> &'static str;
}

/// Build an RFC 3164 frame: `<PRI>Mmm dd hh:mm:ss subsystem[pid]: [category] message`
pub fn syslog_frame(
    subsystem: &str,
    category: &str,
    log_type: OsLogType,
    message: &str,
    now: &DateTime<Local>,
) -> String {
    let priority = u16::from(SYSLOG_FACILITY) * 8 + u16::from(log_type.syslog_severity());
    format!(
        "<{}>{} {}[{}]: [{}] {}",
        priority,
        now.format("%b %e %H:%M:%S"),
        subsystem,
        std::process::id(),
        category,
        message
    )
}

/// Datagram connection to the syslog daemon.
///
/// A failed send reconnects to the same path and resends once, so a
/// restarted daemon does not leave the writer broken.
#[cfg(unix)]
struct SyslogSocket {
    socket: Mutex<UnixDatagram>,
    path: String,
}

#[cfg(unix)]
impl SyslogSocket {
    fn connect(path: &str) -> Result<Self> {
        Ok(Self {
            socket: Mutex::new(Self::open(path)?),
            path: path.to_string(),
        })
    }

    fn open(path: &str) -> Result<UnixDatagram> {
        let socket = UnixDatagram::unbound()?;
        socket.connect(path).map_err(|e| {
            LoggerError::io_operation("connecting to syslog", format!("socket '{}'", path), e)
        })?;
        Ok(socket)
    }

    fn discover() -> Option<Self> {
        SYSLOG_SOCKET_PATHS
            .iter()
            .find_map(|path| Self::connect(path).ok())
    }

    fn send_error(&self, e: std::io::Error) -> LoggerError {
        LoggerError::io_operation("sending to syslog", format!("socket '{}'", self.path), e)
    }
}

#[cfg(unix)]
impl WriterStrategy for SyslogSocket {
    fn write(
        &self,
        subsystem: &str,
        category: &str,
        log_type: OsLogType,
        message: &str,
    ) -> Result<()> {
        let frame = syslog_frame(subsystem, category, log_type, message, &Local::now());
        let mut socket = self.socket.lock();

        match socket.send(frame.as_bytes()) {
            Ok(_) => Ok(()),
            Err(e) => {
                // Daemon restarted or socket replaced: reconnect and resend
                match Self::open(&self.path) {
                    Ok(fresh) => {
                        *socket = fresh;
                        socket
                            .send(frame.as_bytes())
                            .map_err(|e| self.send_error(e))?;
                        Ok(())
                    }
                    Err(_) => Err(self.send_error(e)),
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "syslog"
    }
}

struct StderrStrategy;

impl WriterStrategy for StderrStrategy {
    fn write(
        &self,
        subsystem: &str,
        category: &str,
        log_type: OsLogType,
        message: &str,
    ) -> Result<()> {
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "{}[{}] {}: {}", subsystem, category, log_type, message)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "stderr"
    }
}

/// [`OsWriter`] backed by the host's system log
pub struct SystemLogWriter {
    subsystem: String,
    category: String,
    strategy: Box<dyn WriterStrategy>,
}

impl SystemLogWriter {
    pub fn new(subsystem: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            subsystem: subsystem.into(),
            category: category.into(),
            strategy: Self::select_strategy(),
        }
    }

    /// Always write to stderr, e.g. on hosts without a syslog daemon
    pub fn stderr(subsystem: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            subsystem: subsystem.into(),
            category: category.into(),
            strategy: Box::new(StderrStrategy),
        }
    }

    /// Send to a specific syslog socket
    #[cfg(unix)]
    pub fn with_socket_path(
        subsystem: impl Into<String>,
        category: impl Into<String>,
        path: &str,
    ) -> Result<Self> {
        Ok(Self {
            subsystem: subsystem.into(),
            category: category.into(),
            strategy: Box::new(SyslogSocket::connect(path)?),
        })
    }

    #[cfg(unix)]
    fn select_strategy() -> Box<dyn WriterStrategy> {
        match SyslogSocket::discover() {
            Some(socket) => Box::new(socket),
            None => Box::new(StderrStrategy),
        }
    }

    #[cfg(not(unix))]
    fn select_strategy() -> Box<dyn WriterStrategy> {
        Box::new(StderrStrategy)
    }

    /// `"syslog"` or `"stderr"`
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl OsWriter for SystemLogWriter {
    fn log(&self, log_type: OsLogType, message: &str) -> Result<()> {
        self.strategy
            .write(&self.subsystem, &self.category, log_type, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_syslog_frame() {
        let now = Local
            .with_ymd_and_hms(2025, 1, 8, 9, 3, 7)
            .earliest()
            .expect("valid local datetime");
        let frame = syslog_frame("app", "net", OsLogType::Error, "boom", &now);

        let expected = format!("<11>Jan  8 09:03:07 app[{}]: [net] boom", std::process::id());
        assert_eq!(frame, expected);
    }

    #[test]
    fn test_priority_uses_user_facility() {
        let now = Local::now();
        assert!(syslog_frame("a", "c", OsLogType::Debug, "m", &now).starts_with("<15>"));
        assert!(syslog_frame("a", "c", OsLogType::Fault, "m", &now).starts_with("<10>"));
    }

    #[test]
    fn test_stderr_strategy() {
        let writer = SystemLogWriter::stderr("subsystem", "category");
        assert_eq!(writer.strategy_name(), "stderr");
        assert!(writer.log(OsLogType::Info, "stderr writer test line").is_ok());
    }

    #[test]
    fn test_strategy_is_selected_at_construction() {
        let writer = SystemLogWriter::new("subsystem", "category");
        assert!(matches!(writer.strategy_name(), "syslog" | "stderr"));
        assert_eq!(writer.subsystem(), "subsystem");
        assert_eq!(writer.category(), "category");
    }

    #[cfg(unix)]
    #[test]
    fn test_socket_strategy_delivers_frame() {
        use std::os::unix::net::UnixDatagram;

        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("log.sock");
        let receiver = UnixDatagram::bind(&path).expect("bind test socket");

        let writer = SystemLogWriter::with_socket_path(
            "app",
            "db",
            path.to_str().expect("utf-8 temp path"),
        )
        .expect("connect to test socket");
        assert_eq!(writer.strategy_name(), "syslog");

        writer.log(OsLogType::Fault, "disk gone").unwrap();

        let mut buf = [0u8; 512];
        let len = receiver.recv(&mut buf).expect("receive frame");
        let frame = std::str::from_utf8(&buf[..len]).unwrap();
        assert!(frame.starts_with("<10>"), "{}", frame);
        assert!(frame.ends_with("[db] disk gone"), "{}", frame);
    }

    #[cfg(unix)]
    #[test]
    fn test_socket_strategy_reconnects_after_daemon_restart() {
        use std::os::unix::net::UnixDatagram;

        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("log.sock");
        let receiver = UnixDatagram::bind(&path).expect("bind test socket");

        let writer = SystemLogWriter::with_socket_path(
            "app",
            "db",
            path.to_str().expect("utf-8 temp path"),
        )
        .expect("connect to test socket");

        // Simulate a restarted daemon: old socket gone, new one at the same path
        drop(receiver);
        std::fs::remove_file(&path).expect("remove old socket");
        let restarted = UnixDatagram::bind(&path).expect("rebind test socket");
        restarted
            .set_read_timeout(Some(std::time::Duration::from_secs(5)))
            .expect("set read timeout");

        writer.log(OsLogType::Info, "first").expect("resent after reconnect");
        writer.log(OsLogType::Info, "second").expect("sent on new connection");

        let mut buf = [0u8; 512];
        let len = restarted.recv(&mut buf).expect("receive first frame");
        assert!(std::str::from_utf8(&buf[..len]).unwrap().ends_with("[db] first"));
        let len = restarted.recv(&mut buf).expect("receive second frame");
        assert!(std::str::from_utf8(&buf[..len]).unwrap().ends_with("[db] second"));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreachable_daemon_reports_send_error() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("log.sock");
        let receiver = std::os::unix::net::UnixDatagram::bind(&path).expect("bind test socket");

        let writer = SystemLogWriter::with_socket_path(
            "app",
            "db",
            path.to_str().expect("utf-8 temp path"),
        )
        .expect("connect to test socket");

        drop(receiver);
        std::fs::remove_file(&path).expect("remove socket");

        let err = writer.log(OsLogType::Error, "lost").unwrap_err();
        assert!(err.to_string().contains("sending to syslog"), "{}", err);
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_socket_is_an_error() {
        let result = SystemLogWriter::with_socket_path("app", "db", "/nonexistent/log.sock");
        assert!(matches!(result, Err(LoggerError::IoOperation { .. })));
    }
}
