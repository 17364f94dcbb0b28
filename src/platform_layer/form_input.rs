/*
 * The console's field-collection surface. It walks the user through the six
 * form fields one line at a time, then validates the whole form with the
 * shared field rules. A form that fails validation is reported field by field
 * and never turns into an `AppEvent::FormSubmitted`.
 *
 * Multi-line fields (Category, Description) keep reading lines until an empty
 * line; the collected lines are joined with '\n'.
 */
use crate::core::{FORM_FIELDS, FieldDescriptor, FieldError, FieldKey, FieldSet, validate_fields};
use std::collections::HashMap;

#[derive(Debug, PartialEq)]
pub(crate) enum FormProgress {
    NeedField(&'static FieldDescriptor),
    // Still collecting lines for the current multi-line field.
    NeedMoreLines(&'static FieldDescriptor),
    Rejected(Vec<FieldError>),
    Completed(FieldSet),
}

#[derive(Debug, Default)]
pub(crate) struct FormInput {
    values: HashMap<FieldKey, String>,
    position: usize,
    pending_lines: Vec<String>,
}

impl FormInput {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn current_field(&self) -> Option<&'static FieldDescriptor> {
        FORM_FIELDS.get(self.position)
    }

    /* Feeds one input line (without its line terminator) to the current field. */
    pub(crate) fn accept_line(&mut self, line: &str) -> FormProgress {
        let Some(descriptor) = self.current_field() else {
            return self.finish();
        };

        if descriptor.multiline && !line.is_empty() {
            self.pending_lines.push(line.to_string());
            return FormProgress::NeedMoreLines(descriptor);
        }

        let value = if descriptor.multiline {
            std::mem::take(&mut self.pending_lines).join("\n")
        } else {
            line.to_string()
        };
        self.values.insert(descriptor.key, value);
        self.position += 1;

        match self.current_field() {
            Some(next) => FormProgress::NeedField(next),
            None => self.finish(),
        }
    }

    fn finish(&mut self) -> FormProgress {
        match validate_fields(&self.values) {
            Ok(fields) => FormProgress::Completed(fields),
            Err(errors) => {
                log::debug!("FormInput: Withholding submission, {} invalid field(s).", errors.len());
                FormProgress::Rejected(errors)
            }
        }
    }
}

pub(crate) fn prompt_for(descriptor: &FieldDescriptor) -> String {
    let hint = if descriptor.multiline {
        ", end with an empty line"
    } else {
        ""
    };
    format!(
        "{} (max {} characters{hint}):",
        descriptor.label, descriptor.rules.max_length
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form_fields::FieldErrorKind;

    fn feed(form: &mut FormInput, lines: &[&str]) -> FormProgress {
        let mut last = FormProgress::NeedField(&FORM_FIELDS[0]);
        for line in lines {
            last = form.accept_line(line);
        }
        last
    }

    #[test]
    fn test_complete_form_yields_field_set() {
        // Arrange
        let mut form = FormInput::new();

        // Act
        let progress = feed(
            &mut form,
            &["9.99", "ABC123", "Shoes", "", "Red sneakers", "", "1lb", "M"],
        );

        // Assert
        match progress {
            FormProgress::Completed(fields) => {
                assert_eq!(fields.price, "9.99");
                assert_eq!(fields.category, "Shoes");
                assert_eq!(fields.description, "Red sneakers");
                assert_eq!(fields.size, "M");
            }
            other => panic!("Expected Completed, got {other:?}"),
        }
    }

    #[test]
    fn test_multiline_field_joins_lines_until_empty_line() {
        let mut form = FormInput::new();
        feed(&mut form, &["9.99", "ABC123"]);

        assert_eq!(
            form.accept_line("Shoes"),
            FormProgress::NeedMoreLines(&FORM_FIELDS[2])
        );
        assert_eq!(
            form.accept_line("Running"),
            FormProgress::NeedMoreLines(&FORM_FIELDS[2])
        );
        assert_eq!(form.accept_line(""), FormProgress::NeedField(&FORM_FIELDS[3]));

        match feed(&mut form, &["Red", "", "1lb", "M"]) {
            FormProgress::Completed(fields) => assert_eq!(fields.category, "Shoes\nRunning"),
            other => panic!("Expected Completed, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_sku_is_rejected() {
        let mut form = FormInput::new();

        let progress = feed(
            &mut form,
            &["9.99", "", "Shoes", "", "Red sneakers", "", "1lb", "M"],
        );

        assert_eq!(
            progress,
            FormProgress::Rejected(vec![FieldError {
                key: FieldKey::Sku,
                kind: FieldErrorKind::Missing
            }])
        );
    }

    #[test]
    fn test_over_long_price_is_rejected() {
        let mut form = FormInput::new();
        let long_price = "1".repeat(21);

        let progress = feed(
            &mut form,
            &[long_price.as_str(), "ABC", "Shoes", "", "Red", "", "1lb", "M"],
        );

        match progress {
            FormProgress::Rejected(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].key, FieldKey::Price);
                assert_eq!(errors[0].kind, FieldErrorKind::TooLong { max_length: 20 });
            }
            other => panic!("Expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_prompt_for_mentions_limit_and_multiline_hint() {
        assert_eq!(prompt_for(&FORM_FIELDS[0]), "Price (max 20 characters):");
        assert_eq!(
            prompt_for(&FORM_FIELDS[3]),
            "Description (max 250 characters, end with an empty line):"
        );
    }
}
