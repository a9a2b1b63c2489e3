/// Length as the wallet frontend measures it, in UTF-16 code units
pub fn password_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// True when `value` is at least `min_length` UTF-16 code units long.
pub fn is_strong_password(value: &str, min_length: usize) -> bool {
    password_length(value) >= min_length
}
