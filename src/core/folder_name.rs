/*
 * Builds the delimited folder name from a validated `FieldSet`.
 *
 * The layout is `@price@sku@category@description@weight@size@`. Field values are
 * interpolated verbatim; an `@` inside a value is not escaped, so such a name
 * cannot be split back into its six fields unambiguously.
 */
use super::form_fields::{FieldKey, FieldSet};

pub const FOLDER_NAME_DELIMITER: char = '@';

pub fn build_folder_name(fields: &FieldSet) -> String {
    let mut name = String::new();
    name.push(FOLDER_NAME_DELIMITER);
    for key in FieldKey::ALL {
        name.push_str(fields.value(key));
        name.push(FOLDER_NAME_DELIMITER);
    }
    log::trace!("FolderName: Built '{name}'");
    name
}
