/// Log targets.
///
/// Each phase logs under its own target so `RUST_LOG` can select them, as in
/// `RUST_LOG=parser=debug`.
pub mod targets;
