use shared_types::SUMMARIZE_FILE_FIELD;
use wasm_bindgen::prelude::*;
use web_sys::{window, File, FormData, HtmlInputElement};

/// Look up a file picker by element id
fn file_input(input_id: &str) -> Option<HtmlInputElement> {
    let document = window()?.document()?;
    let element = document.get_element_by_id(input_id)?;
    match element.dyn_into::<HtmlInputElement>() {
        Ok(input) => Some(input),
        Err(_) => {
            log::error!("#{} is not an <input> element", input_id);
            None
        }
    }
}

/// Files currently held by the picker, in selection order
pub fn selected_files(input_id: &str) -> Vec<File> {
    let Some(files) = file_input(input_id).and_then(|input| input.files()) else {
        return Vec::new();
    };
    (0..files.length()).filter_map(|i| files.get(i)).collect()
}

/// First file currently held by the picker
pub fn first_selected_file(input_id: &str) -> Option<File> {
    file_input(input_id)
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

/// Display names of the picker's files
pub fn selected_file_names(input_id: &str) -> Vec<String> {
    selected_files(input_id).iter().map(File::name).collect()
}

/// Multipart body with the file as its only part
pub fn build_upload_form(file: &File) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(SUMMARIZE_FILE_FIELD, file, &file.name())?;
    Ok(form)
}

/// Blocking `alert()` notice
pub fn show_blocking_notice(message: &str) {
    let Some(window) = window() else {
        log::error!("no global `window` for notice: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::error!("alert failed: {:?}", e);
    }
}
