use calamine::Data;

/// Render a cell as a trimmed string regardless of its stored type.
///
/// Numeric cells holding whole numbers come back without a trailing `.0`, so
/// an answer column containing the number `3` normalizes to `"3"`. Empty and
/// error cells normalize to the empty string.
pub fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        Some(Data::String(s)) => s.trim().to_string(),
        Some(Data::Float(f)) if f.is_finite() && f.fract() == 0.0 => (*f as i64).to_string(),
        Some(Data::Float(f)) => f.to_string(),
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Bool(b)) => b.to_string(),
        Some(Data::DateTime(dt)) => dt.as_f64().to_string(),
        Some(Data::DateTimeIso(s)) | Some(Data::DurationIso(s)) => s.trim().to_string(),
        Some(Data::Error(_)) | Some(Data::Empty) | None => String::new(),
    }
}

/// Like [`cell_text`], but string cells keep their whitespace. For values
/// carried through verbatim, e.g. student names used as map keys.
pub fn cell_text_raw(cell: Option<&Data>) -> String {
    match cell {
        Some(Data::String(s)) => s.clone(),
        Some(Data::DateTimeIso(s)) | Some(Data::DurationIso(s)) => s.clone(),
        other => cell_text(other),
    }
}

/// Read a cell as a positive question id. Returns `None` for empty cells and
/// anything that does not hold a positive whole number.
pub fn cell_question_id(cell: Option<&Data>) -> Option<u32> {
    match cell {
        Some(Data::Int(i)) if *i > 0 => u32::try_from(*i).ok(),
        Some(Data::Float(f)) if *f > 0.0 && f.fract() == 0.0 && *f <= u32::MAX as f64 => {
            Some(*f as u32)
        }
        Some(Data::String(s)) => s.trim().parse().ok().filter(|id| *id > 0),
        _ => None,
    }
}
