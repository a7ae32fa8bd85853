use std::io::{self, Write};

use crate::pair::Pair;

/// Separator width between the term column and the translation.
const GAP: usize = 4;

/// Print pairs with every translation aligned one gap past the widest term.
///
/// Widths are measured in characters, not bytes, so multibyte terms line up
/// in monospaced output.
pub fn print_aligned(pairs: &[Pair], out: &mut impl Write) -> io::Result<()> {
    let max_width = pairs.iter().map(|p| width(&p.term)).max().unwrap_or(0);

    for pair in pairs {
        // max_width covers every term, so pad never drops below GAP.
        let mut pad = max_width.saturating_sub(width(&pair.term)) + GAP;
        if pad < GAP {
            pad = GAP;
        }

        writeln!(out, "{}{}{}", pair.term, " ".repeat(pad), pair.translation)?;
    }

    Ok(())
}

fn width(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(term: &str, translation: &str) -> Pair {
        Pair {
            term: term.into(),
            translation: translation.into(),
        }
    }

    fn render(pairs: &[Pair]) -> String {
        let mut out = Vec::new();
        print_aligned(pairs, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn pads_every_term_to_the_widest_column() {
        let out = render(&[pair("apple", "リンゴ"), pair("dog", "犬")]);
        assert_eq!(out, "apple    リンゴ\ndog      犬\n");
    }

    #[test]
    fn widths_are_measured_in_characters_not_bytes() {
        // "猫" is one column here even though it is three bytes long.
        let out = render(&[pair("猫", "cat"), pair("tiger", "トラ")]);
        assert_eq!(out, "猫        cat\ntiger    トラ\n");
    }

    #[test]
    fn every_line_is_term_pad_translation() {
        let batch = [pair("a", "x"), pair("abc", "y"), pair("ab", "zz")];
        let out = render(&batch);

        let max_width = batch.iter().map(|p| p.term.chars().count()).max().unwrap();
        for (line, pair) in out.lines().zip(&batch) {
            let term_width = pair.term.chars().count();
            let pad = (max_width - term_width) + GAP;

            assert_eq!(
                line.chars().count(),
                term_width + pad + pair.translation.chars().count()
            );

            let separator: String = line.chars().skip(term_width).take(pad).collect();
            assert!(separator.chars().all(|c| c == ' '));
        }
    }

    #[test]
    fn empty_batch_prints_nothing() {
        assert_eq!(render(&[]), "");
    }
}
