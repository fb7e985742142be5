// Display-only numeral mapping. Target comparison never goes through here.
use crate::config::ROMAN_FROM_LEVEL;

const ROMAN: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumeralScript {
    Arabic,
    Roman,
}

impl NumeralScript {
    pub fn for_level(level: u32) -> Self {
        if level >= ROMAN_FROM_LEVEL {
            NumeralScript::Roman
        } else {
            NumeralScript::Arabic
        }
    }

    /// Values outside the Roman table fall back to digits.
    pub fn render(self, value: u8) -> String {
        match self {
            NumeralScript::Arabic => value.to_string(),
            NumeralScript::Roman => match value.checked_sub(1).and_then(|i| ROMAN.get(i as usize)) {
                Some(r) => (*r).to_string(),
                None => value.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_switches_at_level_three() {
        assert_eq!(NumeralScript::for_level(1), NumeralScript::Arabic);
        assert_eq!(NumeralScript::for_level(2), NumeralScript::Arabic);
        assert_eq!(NumeralScript::for_level(3), NumeralScript::Roman);
        assert_eq!(NumeralScript::for_level(40), NumeralScript::Roman);
    }

    #[test]
    fn test_roman_table() {
        let r = NumeralScript::Roman;
        assert_eq!(r.render(1), "I");
        assert_eq!(r.render(4), "IV");
        assert_eq!(r.render(9), "IX");
        assert_eq!(r.render(10), "X");
    }

    #[test]
    fn test_out_of_table_falls_back() {
        assert_eq!(NumeralScript::Roman.render(0), "0");
        assert_eq!(NumeralScript::Roman.render(11), "11");
        assert_eq!(NumeralScript::Arabic.render(7), "7");
    }
}
