//! Field buffers used by the modal forms.

/// A single-line text buffer. Editing always happens at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }
}

/// A picker over a fixed list of options.
///
/// `selected` is `None` when the options are empty, when the picker starts
/// unselected, or when a value that is not among the options was requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceField {
    options: Vec<String>,
    selected: Option<usize>,
    starts_unselected: bool,
}

impl ChoiceField {
    /// Create a picker with the first option selected.
    pub fn new(options: Vec<String>) -> Self {
        let mut field = Self {
            options,
            selected: None,
            starts_unselected: false,
        };
        field.reset();
        field
    }

    /// Create a picker that shows no selection until one is made.
    pub fn unselected(options: Vec<String>) -> Self {
        Self {
            options,
            selected: None,
            starts_unselected: true,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Text of the selected option.
    pub fn value(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.options.get(index))
            .map(String::as_str)
    }

    /// Replace the options and return to the initial selection.
    pub fn set_options(&mut self, options: Vec<String>) {
        self.options = options;
        self.reset();
    }

    /// Return to the initial selection: the first option, or nothing for
    /// pickers built with [`ChoiceField::unselected`].
    pub fn reset(&mut self) {
        self.selected = if self.starts_unselected || self.options.is_empty() {
            None
        } else {
            Some(0)
        };
    }

    /// Select the option equal to `value`. Returns whether it was found;
    /// when it was not, nothing is selected.
    pub fn select_value(&mut self, value: &str) -> bool {
        self.selected = self.options.iter().position(|option| option == value);
        self.selected.is_some()
    }

    /// Move to the next option, wrapping around. From no selection this picks
    /// the first option.
    pub fn next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(index) => (index + 1) % self.options.len(),
            None => 0,
        });
    }

    /// Move to the previous option, wrapping around. From no selection this
    /// picks the last option.
    pub fn previous(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let last = self.options.len() - 1;
        self.selected = Some(match self.selected {
            Some(0) | None => last,
            Some(index) => index - 1,
        });
    }
}

/// What a form field holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text(TextField),
    Choice(ChoiceField),
}

/// One labelled field of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input: FieldInput,
}

impl FormField {
    pub fn text(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            input: FieldInput::Text(TextField::new()),
        }
    }

    pub fn choice(label: &'static str, options: Vec<String>) -> Self {
        Self {
            label,
            placeholder: "",
            input: FieldInput::Choice(ChoiceField::new(options)),
        }
    }

    /// A picker that starts with nothing selected, showing `placeholder`.
    pub fn prompt_choice(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            input: FieldInput::Choice(ChoiceField::unselected(Vec::new())),
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.input, FieldInput::Choice(_))
    }

    /// Text as displayed: the buffer for text fields, the selected option
    /// (or an empty string) for pickers.
    pub fn display_value(&self) -> &str {
        match &self.input {
            FieldInput::Text(text) => text.value(),
            FieldInput::Choice(choice) => choice.value().unwrap_or(""),
        }
    }

    /// Empty text buffers and point pickers back at their first option.
    pub fn reset(&mut self) {
        match &mut self.input {
            FieldInput::Text(text) => text.clear(),
            FieldInput::Choice(choice) => choice.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        vec!["abdul".into(), "Jane Smith".into()]
    }

    #[test]
    fn test_text_field_editing() {
        let mut field = TextField::new();
        field.push('4');
        field.push('2');
        field.backspace();
        assert_eq!(field.value(), "4");
        field.backspace();
        field.backspace();
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_choice_starts_on_first_option() {
        let choice = ChoiceField::new(names());
        assert_eq!(choice.value(), Some("abdul"));
        assert_eq!(ChoiceField::new(Vec::new()).value(), None);
    }

    #[test]
    fn test_choice_cycles_both_ways() {
        let mut choice = ChoiceField::new(names());
        choice.next();
        assert_eq!(choice.value(), Some("Jane Smith"));
        choice.next();
        assert_eq!(choice.value(), Some("abdul"));
        choice.previous();
        assert_eq!(choice.value(), Some("Jane Smith"));
    }

    #[test]
    fn test_select_unknown_value_clears_selection() {
        let mut choice = ChoiceField::new(names());
        assert!(!choice.select_value("John Doe"));
        assert_eq!(choice.value(), None);

        choice.next();
        assert_eq!(choice.value(), Some("abdul"));
    }

    #[test]
    fn test_unselected_picker_stays_empty_after_new_options() {
        let mut choice = ChoiceField::unselected(Vec::new());
        choice.set_options(names());
        assert_eq!(choice.value(), None);
        choice.next();
        assert_eq!(choice.value(), Some("abdul"));
        choice.reset();
        assert_eq!(choice.selected_index(), None);
    }

    #[test]
    fn test_field_reset() {
        let mut field = FormField::text("Name", "Full name");
        if let FieldInput::Text(text) = &mut field.input {
            text.set("Carl");
        }
        field.reset();
        assert_eq!(field.display_value(), "");
    }
}
