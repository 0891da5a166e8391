//! Files compiled into the binary.
//!
//! Assets are looked up by the file name they are written out as, so the
//! `generate` command never needs to know where the bytes came from.

/// File name of the bundled golangci-lint configuration.
pub const GOLANGCI_CONFIG: &str = ".golangci.yml";

static ASSETS: &[(&str, &[u8])] = &[(
    GOLANGCI_CONFIG,
    include_bytes!("../assets/.golangci.yml"),
)];

/// Returns the bytes of the bundled asset called `name`, if there is one.
pub fn get(name: &str) -> Option<&'static [u8]> {
    ASSETS
        .iter()
        .find(|(asset_name, _)| *asset_name == name)
        .map(|(_, bytes)| *bytes)
}
