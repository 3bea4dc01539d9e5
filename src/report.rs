//! Rendering of analysis results

use crate::config::OutputFormat;
use crate::error::Result;
use crate::grammar::{PointOfView, RelationshipEdge, Tense, Word};
use crate::sentence::Sentence;

/// Renders `sentences` in the requested format
pub fn render(sentences: &[Sentence], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(sentences)),
        OutputFormat::Json => render_json(sentences),
    }
}

/// Human-readable report. Each sentence is a header line
/// (`type: raw text`) followed by one line per word and one per edge;
/// sentences are separated by a blank line.
///
/// Word lines read `text/role` plus tense, person, `self` for speaker
/// references and `inferred` for roles not backed by the dictionary.
pub fn render_text(sentences: &[Sentence]) -> String {
    sentences
        .iter()
        .map(sentence_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_json(sentences: &[Sentence]) -> Result<String> {
    let json = serde_json::to_string_pretty(sentences).map_err(std::io::Error::from)?;
    Ok(json)
}

fn sentence_block(sentence: &Sentence) -> String {
    let mut lines = Vec::with_capacity(1 + sentence.words.len() + sentence.edges.len());

    if sentence.degenerate {
        lines.push(format!(
            "{} (degenerate): {}",
            sentence.sentence_type.as_str(),
            sentence.raw
        ));
    } else {
        lines.push(format!("{}: {}", sentence.sentence_type.as_str(), sentence.raw));
    }

    lines.extend(sentence.words.iter().map(word_line));
    lines.extend(sentence.edges.iter().map(|e| edge_line(&sentence.words, e)));
    lines.join("\n")
}

fn word_line(word: &Word) -> String {
    let mut line = format!("  {}/{}", word.text, word.role);
    if word.tense != Tense::Unknown {
        line.push(' ');
        line.push_str(word.tense.as_str());
    }
    if word.point_of_view != PointOfView::Unknown {
        line.push(' ');
        line.push_str(word.point_of_view.as_str());
    }
    if word.self_reference {
        line.push_str(" self");
    }
    if word.unknown && word.is_resolved() {
        line.push_str(" inferred");
    }
    line
}

fn edge_line(words: &[Word], edge: &RelationshipEdge) -> String {
    let text = |i: usize| words.get(i).map_or("?", |w| w.text.as_str());
    let mut line = format!("  {} -> {} {}", text(edge.from), text(edge.to), edge.kind.as_str());
    if let Some(via) = edge.via {
        line.push_str(" via ");
        line.push_str(text(via));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{DictionaryStore, Role};
    use crate::engine::analyze;

    #[test]
    fn test_text_report() {
        let dictionary = DictionaryStore::builtin();
        let sentences = analyze("I am hungry. Produce food.", &dictionary);
        insta::assert_snapshot!(render_text(&sentences), @r###"
        declarative: I am hungry.
          I/noun first self
          am/verb present first
          hungry/unknown
          am -> I subject

        imperative (degenerate): Produce food.
          Produce/verb present inferred
          food/unknown
        "###);
    }

    #[test]
    fn test_text_report_with_preposition() {
        let dictionary = DictionaryStore::builtin()
            .with_words(Role::Noun, ["dog", "food", "table"])
            .with_words(Role::Verb, ["eats"]);
        let sentences = analyze("The dog eats food on the table.", &dictionary);
        insta::assert_snapshot!(render_text(&sentences), @r###"
        declarative: The dog eats food on the table.
          The/unknown
          dog/noun third
          eats/verb present third
          food/noun third
          on/preposition
          the/unknown
          table/noun third
          eats -> dog subject
          eats -> food object
          table -> eats locative via on
        "###);
    }

    #[test]
    fn test_degenerate_header() {
        let dictionary = DictionaryStore::builtin();
        let sentences = analyze("Xylophone.", &dictionary);
        insta::assert_snapshot!(render_text(&sentences), @r###"
        declarative (degenerate): Xylophone.
          Xylophone/unknown
        "###);
    }

    #[test]
    fn test_json_report() {
        let dictionary = DictionaryStore::builtin();
        let sentences = analyze("Are you hungry?", &dictionary);
        let json = render(&sentences, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let sentence = &value[0];
        assert_eq!(sentence["raw"], "Are you hungry?");
        assert_eq!(sentence["sentence_type"], "interrogative");
        assert_eq!(sentence["degenerate"], false);
        assert_eq!(sentence["words"][0]["role"], "verb");
        assert_eq!(sentence["words"][1]["point_of_view"], "second");
        assert_eq!(sentence["words"][0]["candidates"], serde_json::json!(["verb"]));

        // both formats spell roles the same way
        let text = render_text(&sentences);
        let words = sentence["words"].as_array().unwrap();
        for (word, line) in words.iter().zip(text.lines().skip(1)) {
            let role = line.trim().split(['/', ' ']).nth(1).unwrap();
            assert_eq!(word["role"], role);
        }
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(render_text(&[]), "");
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }
}
