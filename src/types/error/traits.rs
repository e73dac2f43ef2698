use super::{Error, ErrorKind};
use crate::types::ErrorFormatConfig;
use core::fmt::Display;

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if !f.alternate() {
            return f.write_str(&ErrorFormatConfig::compact().render(self));
        }
        f.write_str(&ErrorFormatConfig::pretty().render(self))
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        if let ErrorKind::Exceptional(info) = &self.kind {
            if let Some(source) = info.source() {
                return Some(source as &(dyn core::error::Error + 'static));
            }
        }
        self.inner_errors.first().map(|cause| cause as &(dyn core::error::Error + 'static))
    }
}
