/// Front-end tuning constants.
///
/// Values shared with the pre-rendered shell (element ids, attribute names)
/// live in `parallax_core::constants`; these only concern the browser side.
// Log level for the console logger
pub const CONSOLE_LOG_LEVEL: log::Level = log::Level::Info;
