//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Every flag is further gated by `cfg(debug_assertions)`
//! at the call site.

pub struct DebugFlags {
    /// Emit UI interaction logs (colour mode switches, circle clicks, file choices).
    pub print_ui_interactions: bool,
    /// Emit how long each force layout took and how many circles it placed.
    pub print_layout_timing: bool,
    /// Emit per-load summaries (record count, dropped records, skipped months).
    pub print_file_loads: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: false,
    print_layout_timing: false,
    print_file_loads: false,
    print_state_serde: false,
    print_shutdown: false,
};
