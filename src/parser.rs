use std::mem;

/// Quoting mode at the current position of the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

/// Splits an input string into a vector of arguments.
///
/// This tokenizer handles:
/// - Single quotes (`'...'`): Preserves literal contents.
/// - Double quotes (`"..."`): Preserves contents, only `\"` and `\\` are escapes.
/// - Unquoted text: Split by whitespace, a backslash escapes the next character.
///
/// Segments with no whitespace between them are joined into one argument, and an
/// empty pair of quotes still produces an (empty) argument. An unterminated quote
/// consumes the rest of the input literally.
///
/// # Example
/// ```
/// let args = minsh::tokenize("echo 'hello world'");
/// assert_eq!(args, vec!["echo", "hello world"]);
/// ```
pub fn tokenize(input: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut arg = String::new();
    // Separates "no argument here" from an argument that is present but empty.
    let mut has_content = false;
    let mut quote = Quote::None;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match quote {
            Quote::Single => match c {
                '\'' => quote = Quote::None,
                _ => arg.push(c),
            },
            Quote::Double => match c {
                '"' => quote = Quote::None,
                '\\' => match chars.peek() {
                    Some(&next) if next == '"' || next == '\\' => {
                        arg.push(next);
                        chars.next();
                    }
                    _ => arg.push('\\'),
                },
                _ => arg.push(c),
            },
            Quote::None => match c {
                '\'' => {
                    quote = Quote::Single;
                    has_content = true;
                }
                '"' => {
                    quote = Quote::Double;
                    has_content = true;
                }
                '\\' => {
                    // A trailing backslash has nothing to escape and is kept as is.
                    arg.push(chars.next().unwrap_or('\\'));
                    has_content = true;
                }
                c if is_separator(c) => {
                    if has_content {
                        args.push(mem::take(&mut arg));
                        has_content = false;
                    }
                }
                _ => {
                    arg.push(c);
                    has_content = true;
                }
            },
        }
    }

    if has_content {
        args.push(arg);
    }
    args
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}
