/*
 * Describes the six input fields of the folder-name form and the rules each
 * one must satisfy before a submission is accepted. The descriptors are shared
 * by the field-collection surface (for prompting and error display) and by the
 * validation routine that turns raw input into a `FieldSet`.
 */
use std::collections::HashMap;

/* The six fields, in the order they appear in a folder name. */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Price,
    Sku,
    Category,
    Description,
    Weight,
    Size,
}

impl FieldKey {
    pub const ALL: [FieldKey; 6] = [
        FieldKey::Price,
        FieldKey::Sku,
        FieldKey::Category,
        FieldKey::Description,
        FieldKey::Weight,
        FieldKey::Size,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FieldKey::Price => "price",
            FieldKey::Sku => "sku",
            FieldKey::Category => "category",
            FieldKey::Description => "description",
            FieldKey::Weight => "weight",
            FieldKey::Size => "size",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRules {
    pub required: bool,
    pub max_length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: FieldKey,
    pub label: &'static str,
    // Category and Description accept longer, free-form text.
    pub multiline: bool,
    pub rules: FieldRules,
}

pub static FORM_FIELDS: [FieldDescriptor; 6] = [
    FieldDescriptor {
        key: FieldKey::Price,
        label: "Price",
        multiline: false,
        rules: FieldRules {
            required: true,
            max_length: 20,
        },
    },
    FieldDescriptor {
        key: FieldKey::Sku,
        label: "SKU",
        multiline: false,
        rules: FieldRules {
            required: true,
            max_length: 100,
        },
    },
    FieldDescriptor {
        key: FieldKey::Category,
        label: "Category",
        multiline: true,
        rules: FieldRules {
            required: true,
            max_length: 250,
        },
    },
    FieldDescriptor {
        key: FieldKey::Description,
        label: "Description",
        multiline: true,
        rules: FieldRules {
            required: true,
            max_length: 250,
        },
    },
    FieldDescriptor {
        key: FieldKey::Weight,
        label: "Weight",
        multiline: false,
        rules: FieldRules {
            required: true,
            max_length: 50,
        },
    },
    FieldDescriptor {
        key: FieldKey::Size,
        label: "Size",
        multiline: false,
        rules: FieldRules {
            required: true,
            max_length: 50,
        },
    },
];

pub fn descriptor_for(key: FieldKey) -> &'static FieldDescriptor {
    // FORM_FIELDS is declared in FieldKey::ALL order.
    let index = FieldKey::ALL
        .iter()
        .position(|k| *k == key)
        .unwrap_or_default();
    &FORM_FIELDS[index]
}

/*
 * The six attribute values of one submission, as produced by
 * `validate_fields` once every field satisfies its rules.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    pub price: String,
    pub sku: String,
    pub category: String,
    pub description: String,
    pub weight: String,
    pub size: String,
}

impl FieldSet {
    pub fn value(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Price => &self.price,
            FieldKey::Sku => &self.sku,
            FieldKey::Category => &self.category,
            FieldKey::Description => &self.description,
            FieldKey::Weight => &self.weight,
            FieldKey::Size => &self.size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Missing,
    TooLong { max_length: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub key: FieldKey,
    pub kind: FieldErrorKind,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            FieldErrorKind::Missing => write!(f, "{} is required", self.key.key()),
            FieldErrorKind::TooLong { max_length } => write!(
                f,
                "{} must be at most {max_length} characters",
                self.key.key()
            ),
        }
    }
}

fn check_field(descriptor: &FieldDescriptor, raw: Option<&String>) -> Option<FieldErrorKind> {
    let value = raw.map(String::as_str).unwrap_or("");
    if descriptor.rules.required && value.is_empty() {
        return Some(FieldErrorKind::Missing);
    }
    if value.chars().count() > descriptor.rules.max_length {
        return Some(FieldErrorKind::TooLong {
            max_length: descriptor.rules.max_length,
        });
    }
    None
}

/*
 * Validates raw form input against `FORM_FIELDS`. Either all six fields pass
 * and a `FieldSet` is returned, or every failing field is reported, in form
 * order. Values are taken verbatim; no trimming or escaping is applied.
 */
pub fn validate_fields(raw: &HashMap<FieldKey, String>) -> Result<FieldSet, Vec<FieldError>> {
    let errors: Vec<FieldError> = FORM_FIELDS
        .iter()
        .filter_map(|descriptor| {
            check_field(descriptor, raw.get(&descriptor.key)).map(|kind| FieldError {
                key: descriptor.key,
                kind,
            })
        })
        .collect();

    if !errors.is_empty() {
        log::debug!("FormFields: Validation failed for {} field(s).", errors.len());
        return Err(errors);
    }

    let take = |key: FieldKey| raw.get(&key).cloned().unwrap_or_default();
    Ok(FieldSet {
        price: take(FieldKey::Price),
        sku: take(FieldKey::Sku),
        category: take(FieldKey::Category),
        description: take(FieldKey::Description),
        weight: take(FieldKey::Weight),
        size: take(FieldKey::Size),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_input() -> HashMap<FieldKey, String> {
        HashMap::from([
            (FieldKey::Price, "9.99".to_string()),
            (FieldKey::Sku, "ABC123".to_string()),
            (FieldKey::Category, "Shoes".to_string()),
            (FieldKey::Description, "Red sneakers".to_string()),
            (FieldKey::Weight, "1lb".to_string()),
            (FieldKey::Size, "M".to_string()),
        ])
    }

    #[test]
    fn test_validate_fields_accepts_complete_input() {
        let fields = validate_fields(&complete_input()).expect("input should be valid");
        assert_eq!(fields.price, "9.99");
        assert_eq!(fields.sku, "ABC123");
        assert_eq!(fields.value(FieldKey::Description), "Red sneakers");
        assert_eq!(fields.value(FieldKey::Size), "M");
    }

    #[test]
    fn test_validate_fields_reports_missing_sku() {
        // Arrange
        let mut input = complete_input();
        input.remove(&FieldKey::Sku);

        // Act
        let errors = validate_fields(&input).unwrap_err();

        // Assert
        assert_eq!(
            errors,
            vec![FieldError {
                key: FieldKey::Sku,
                kind: FieldErrorKind::Missing
            }]
        );
        assert_eq!(errors[0].to_string(), "sku is required");
    }

    #[test]
    fn test_validate_fields_treats_empty_string_as_missing() {
        let mut input = complete_input();
        input.insert(FieldKey::Weight, String::new());

        let errors = validate_fields(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].key, FieldKey::Weight);
        assert_eq!(errors[0].kind, FieldErrorKind::Missing);
    }

    #[test]
    fn test_validate_fields_enforces_max_length_per_field() {
        for descriptor in FORM_FIELDS.iter() {
            let max = descriptor.rules.max_length;

            let mut at_limit = complete_input();
            at_limit.insert(descriptor.key, "x".repeat(max));
            assert!(
                validate_fields(&at_limit).is_ok(),
                "{} at exactly {max} chars should pass",
                descriptor.label
            );

            let mut over_limit = complete_input();
            over_limit.insert(descriptor.key, "x".repeat(max + 1));
            let errors = validate_fields(&over_limit).unwrap_err();
            assert_eq!(
                errors,
                vec![FieldError {
                    key: descriptor.key,
                    kind: FieldErrorKind::TooLong { max_length: max }
                }]
            );
        }
    }

    #[test]
    fn test_validate_fields_counts_characters_not_bytes() {
        let mut input = complete_input();
        // 20 two-byte characters fit the 20-character price limit.
        input.insert(FieldKey::Price, "é".repeat(20));
        assert!(validate_fields(&input).is_ok());
    }

    #[test]
    fn test_validate_fields_reports_all_failures_in_form_order() {
        let input = HashMap::from([(FieldKey::Category, "Shoes".to_string())]);

        let errors = validate_fields(&input).unwrap_err();
        let keys: Vec<FieldKey> = errors.iter().map(|e| e.key).collect();
        assert_eq!(
            keys,
            vec![
                FieldKey::Price,
                FieldKey::Sku,
                FieldKey::Description,
                FieldKey::Weight,
                FieldKey::Size
            ]
        );
    }

    #[test]
    fn test_form_fields_limits_match_form_definition() {
        let limits: Vec<usize> = FORM_FIELDS.iter().map(|d| d.rules.max_length).collect();
        assert_eq!(limits, vec![20, 100, 250, 250, 50, 50]);
        assert!(FORM_FIELDS.iter().all(|d| d.rules.required));
        assert_eq!(descriptor_for(FieldKey::Weight).label, "Weight");
    }
}
