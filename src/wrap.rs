//! Fixed-width word wrapping for display bodies

/// Greedy word wrap over whitespace-separated tokens
///
/// Widths are counted in characters, including the single space
/// joining tokens on a line. A token wider than `max_width` gets
/// a line of its own, unsplit.
pub fn wrap_text(text: &str, max_width: usize) -> String
{   let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace()
    {   let word_width = word.chars().count();
        if current.is_empty()
        {   current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= max_width
        {   current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else
        {   lines.push(current);
            current = word.to_string();
            current_width = word_width;
        }
    }

    // Always at least one line, possibly empty
    lines.push(current);
    lines.join("\n")
}
