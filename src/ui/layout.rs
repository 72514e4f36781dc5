//! Responsive Layout System
//!
//! Provides a `LayoutContext` that encapsulates terminal dimensions and the
//! sizing decisions derived from them. It is passed to every render function.

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
    /// Medium terminal height (< 40 rows)
    pub const MD_HEIGHT: u16 = 40;
}

/// Size category for responsive design decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    /// Extra small (< 60 cols or < 16 rows)
    ExtraSmall,
    /// Small (< 80 cols or < 24 rows)
    Small,
    /// Medium (< 120 cols or < 40 rows)
    Medium,
    /// Large (>= 120 cols and >= 40 rows)
    Large,
}

// ============================================================================
// Layout Context
// ============================================================================

/// Layout context holding terminal dimensions for responsive calculations.
///
/// # Example
///
/// ```ignore
/// let ctx = LayoutContext::new(120, 40);
/// let dialog_width = ctx.bounded_width(50, 30, 60);
/// if ctx.is_short() {
///     // one-line form fields
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    // ========================================================================
    // Percentage-Based Calculations
    // ========================================================================

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate proportional width with min/max bounds.
    ///
    /// # Example
    /// ```ignore
    /// let ctx = LayoutContext::new(200, 40);
    /// // 30% of 200 = 60, but clamped to max of 50
    /// assert_eq!(ctx.bounded_width(30, 20, 50), 50);
    /// ```
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    // ========================================================================
    // Size Category Detection
    // ========================================================================

    pub fn width_category(&self) -> SizeCategory {
        if self.width < breakpoints::XS_WIDTH {
            SizeCategory::ExtraSmall
        } else if self.width < breakpoints::SM_WIDTH {
            SizeCategory::Small
        } else if self.width < breakpoints::MD_WIDTH {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    pub fn height_category(&self) -> SizeCategory {
        if self.height < breakpoints::XS_HEIGHT {
            SizeCategory::ExtraSmall
        } else if self.height < breakpoints::SM_HEIGHT {
            SizeCategory::Small
        } else if self.height < breakpoints::MD_HEIGHT {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    /// Check if the terminal is in a "narrow" state (less than 80 columns).
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Check if the terminal is in a "short" state (less than 24 rows).
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Check if the terminal is in a "compact" state (narrow or short).
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    /// Check if the terminal is extra small (very constrained space).
    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    // ========================================================================
    // Layout Mode Decisions
    // ========================================================================

    /// Stat cards go two per row below 80 columns.
    pub fn stat_cards_per_row(&self) -> usize {
        if self.is_narrow() {
            2
        } else {
            4
        }
    }

    /// Whether the table action column shows full button labels.
    pub fn should_show_full_buttons(&self) -> bool {
        !self.is_extra_small()
    }
}
