///Splits a raw input line into words.
///
/// Only the space character is a delimiter. Adjacent spaces are **not** merged, so `"a  b"`
/// yields `["a", "", "b"]`. The result always has one more word than the line has spaces.
pub fn tokenize(raw_line: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::with_capacity(raw_line.len() + 1);
    let mut curr_word = String::with_capacity(raw_line.len());

    for c in raw_line.chars() {
        match c {
            ' ' => {
                words.push(curr_word.as_str().to_string());
                curr_word.clear();
            }
            _ => {
                curr_word.push(c);
            }
        }
    }

    //Trailing remainder, possibly empty
    words.push(curr_word);
    words
}
