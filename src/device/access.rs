use serde::{Deserialize, Serialize};
use std::fmt;

/// Predefined access rights.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Access {
    /// Neither read nor write access is permitted.
    None,
    /// Read operations have an undefined result. Write access is permitted.
    WriteOnly,
    /// Read access is permitted. Write operations have an undefined result.
    ReadOnly,
    /// Read and write accesses are permitted. Writes affect the state of the
    /// register and reads return the register value.
    ReadWrite,
}

const PERMISSIONS: [[Access; 2]; 2] =
    [[Access::None, Access::WriteOnly], [Access::ReadOnly, Access::ReadWrite]];

impl Access {
    /// Maps a pair of read/write permissions to the access enumerator.
    pub fn from_permissions(readable: bool, writable: bool) -> Self {
        PERMISSIONS[usize::from(readable)][usize::from(writable)]
    }

    /// Returns the SVD text form.
    pub fn as_str(self) -> &'static str {
        match self {
            Access::None => "none",
            Access::WriteOnly => "write-only",
            Access::ReadOnly => "read-only",
            Access::ReadWrite => "read-write",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissions_table() {
        assert_eq!(Access::from_permissions(false, false).as_str(), "none");
        assert_eq!(Access::from_permissions(false, true).as_str(), "write-only");
        assert_eq!(Access::from_permissions(true, false).as_str(), "read-only");
        assert_eq!(Access::from_permissions(true, true).as_str(), "read-write");
    }

    #[test]
    fn serde_uses_svd_names() {
        for access in [Access::None, Access::WriteOnly, Access::ReadOnly, Access::ReadWrite] {
            let json = serde_json::to_string(&access).unwrap();
            assert_eq!(json, format!("\"{access}\""));
            assert_eq!(serde_json::from_str::<Access>(&json).unwrap(), access);
        }
    }
}
