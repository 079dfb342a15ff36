use std::fmt;

/// Error returned by [`ScreenLog::create_default_log`][create] when a default
/// log has already been installed.
///
/// [create]: crate::ScreenLog::create_default_log
#[derive(Debug)]
pub struct InstallError(pub(crate) ());

impl std::error::Error for InstallError {}

impl fmt::Display for InstallError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad("A default screen log has already been installed")
    }
}
