//! Serbian Cyrillic to Latin transliteration.

/// Latin letter or digraph for a Serbian Cyrillic letter, case preserved.
fn latin_for(ch: char) -> Option<&'static str> {
    let latin = match ch {
        'а' => "a",
        'А' => "A",
        'б' => "b",
        'Б' => "B",
        'в' => "v",
        'В' => "V",
        'г' => "g",
        'Г' => "G",
        'д' => "d",
        'Д' => "D",
        'ђ' => "đ",
        'Ђ' => "Đ",
        'е' => "e",
        'Е' => "E",
        'ж' => "ž",
        'Ж' => "Ž",
        'з' => "z",
        'З' => "Z",
        'и' => "i",
        'И' => "I",
        'ј' => "j",
        'Ј' => "J",
        'к' => "k",
        'К' => "K",
        'л' => "l",
        'Л' => "L",
        'љ' => "lj",
        'Љ' => "Lj",
        'м' => "m",
        'М' => "M",
        'н' => "n",
        'Н' => "N",
        'њ' => "nj",
        'Њ' => "Nj",
        'о' => "o",
        'О' => "O",
        'п' => "p",
        'П' => "P",
        'р' => "r",
        'Р' => "R",
        'с' => "s",
        'С' => "S",
        'т' => "t",
        'Т' => "T",
        'ћ' => "ć",
        'Ћ' => "Ć",
        'у' => "u",
        'У' => "U",
        'ф' => "f",
        'Ф' => "F",
        'х' => "h",
        'Х' => "H",
        'ц' => "c",
        'Ц' => "C",
        'ч' => "č",
        'Ч' => "Č",
        'џ' => "dž",
        'Џ' => "Dž",
        'ш' => "š",
        'Ш' => "Š",
        _ => return None,
    };
    Some(latin)
}

/// Transliterate Serbian Cyrillic letters to Latin.
///
/// Letters outside the Serbian alphabet (Russian `я`, Ukrainian `і`, ...) are
/// passed through untouched, so foreign words can come out in mixed script.
pub fn cyrillic_to_latin(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    for ch in word.chars() {
        match latin_for(ch) {
            Some(latin) => result.push_str(latin),
            None => result.push(ch),
        }
    }
    result
}
