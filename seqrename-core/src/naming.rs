/// Split a file name into stem and extension.
///
/// The extension starts at the last dot and includes it. Leading dots belong
/// to the stem, so `.bashrc` has no extension while `archive.tar.gz` yields
/// `.gz` and `notes.` yields `.`.
pub fn split_extension(name: &str) -> (&str, &str) {
    let leading = name.len() - name.trim_start_matches('.').len();
    match name[leading..].rfind('.') {
        Some(pos) => name.split_at(leading + pos),
        None => (name, ""),
    }
}

/// Compute the new name for the file at `index`: `{prefix}_{index}{extension}`
pub fn sequential_name(prefix: &str, index: usize, original_name: &str) -> String {
    let (_, extension) = split_extension(original_name);
    format!("{}_{}{}", prefix, index, extension)
}
