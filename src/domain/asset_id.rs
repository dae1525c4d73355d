//! Opaque identifier for a tradable asset.

use core::fmt;

/// A 20-byte asset identifier (an EVM-style token address).
///
/// The engine never resolves metadata for an asset; identifiers exist only
/// so a [`SwapQuote`](super::SwapQuote) can name which asset each hop
/// consumes and produces, and so route continuity can be validated.
///
/// # Examples
///
/// ```
/// use poolmath::domain::AssetId;
///
/// let weth = AssetId::from_bytes([0xC0; 20]);
/// let dai = AssetId::from_bytes([0x6B; 20]);
/// assert_ne!(weth, dai);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId([u8; 20]);

impl AssetId {
    /// Creates an `AssetId` from a raw 20-byte address.
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Returns the raw address bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
