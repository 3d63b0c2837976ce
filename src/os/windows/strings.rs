//! Conversion helpers for fixed-size ANSI buffers in toolhelp entries

/// Converts a null-terminated fixed-size ANSI buffer (as found in
/// `PROCESSENTRY32::szExeFile` and `MODULEENTRY32::szModule`) to a `String`.
pub fn ansi_to_string(buffer: &[i8]) -> String {
    let null_pos = buffer
        .iter()
        .position(|&c| c == 0)
        .unwrap_or(buffer.len());
    let bytes: Vec<u8> = buffer[..null_pos].iter().map(|&c| c as u8).collect();
    String::from_utf8_lossy(&bytes).into_owned()
}
