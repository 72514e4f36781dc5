//! Color theme constants for the records UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Active tab, stat values and the selected-row marker
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Background of the selected table row
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 35, 55);

// ============================================================================
// Status Colors
// ============================================================================

/// Validation errors and destructive buttons
pub const COLOR_ERROR: Color = Color::Red;

/// Edit buttons and upcoming appointment times
pub const COLOR_LINK: Color = Color::Rgb(0, 122, 204); // blue #007ACC

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background color for dialog boxes (forms, delete confirmation)
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
