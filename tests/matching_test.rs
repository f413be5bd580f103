use milon::analysis::analyzer::{Analyzer, HebrewAnalyzer};
use milon::analysis::{candidate_forms, normalize, normalize_final_forms, strip_niqqud, tokenize};
use milon::vocabulary::{
    KnownWord, MatchResult, ReadingHighlighter, SegmentKind, VocabularyEntry, VocabularyMatcher,
    WordType, compose_source_text, match_against_vocabulary, merge_vocabulary,
    parse_generated_vocabulary, tokenize_and_normalize,
};

fn word_bank() -> Vec<KnownWord> {
    vec![
        KnownWord::new("ילד", "niño", "1"),
        KnownWord::new("גדול", "grande", "2"),
        KnownWord::new("ללכת", "caminar", "3").with_conjugations(true),
    ]
}

#[test]
fn test_normalization_is_idempotent() {
    let samples = ["שָׁלוֹם עֲלֵיכֶם", "מלך ארץ", "", "abc", "בְּרֵאשִׁית בָּרָא"];
    for sample in samples {
        let stripped = strip_niqqud(sample);
        assert_eq!(strip_niqqud(&stripped), stripped);

        let folded = normalize_final_forms(sample);
        assert_eq!(normalize_final_forms(&folded), folded);

        let normalized = normalize(sample);
        assert_eq!(normalize(&normalized), normalized);
    }
}

#[test]
fn test_tokenize_examples() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("hello world 123").is_empty());
    assert_eq!(
        tokenize("והילד הלך לבית הגדול."),
        vec!["והילד", "הלך", "לבית", "הגדול"]
    );
    assert_eq!(
        tokenize_and_normalize("הלך, הלך וחזר"),
        vec!["הלך", "וחזר"]
    );
}

#[test]
fn test_candidate_forms_of_prefixed_token() {
    let forms = candidate_forms("והילד");
    for expected in ["והילד", "הילד", "ילד"] {
        assert!(forms.iter().any(|f| f == expected), "missing {expected}");
    }
    assert_eq!(forms[0], "והילד");
}

#[test]
fn test_end_to_end_match() {
    let result = match_against_vocabulary("והילד הלך לבית הגדול.", &word_bank());

    let known: Vec<(&str, &str)> = result
        .known_vocab
        .iter()
        .map(|e| (e.hebrew.as_str(), e.translation.as_str()))
        .collect();
    assert_eq!(known, vec![("והילד", "niño"), ("הגדול", "grande")]);
    assert_eq!(result.unknown_tokens, vec!["הלך", "לבית"]);
    assert_eq!(result.used_words.len(), 2);
}

#[test]
fn test_first_hit_precedence() {
    let words = vec![
        KnownWord::new("הבית", "la casa", "a"),
        KnownWord::new("בית", "casa", "b"),
    ];
    let result = match_against_vocabulary("בבית", &words);
    assert_eq!(result.known_vocab[0].translation, "la casa");
}

#[test]
fn test_length_guards() {
    let words = vec![KnownWord::new("ב", "en", "1")];
    let result = match_against_vocabulary("בה בו", &words);
    assert!(result.known_vocab.is_empty());
    assert_eq!(result.unknown_tokens, vec!["בה", "בו"]);
}

#[test]
fn test_matching_is_repeatable() {
    let words = word_bank();
    let text = "הילד הגדול רוצה ללכת לבית הספר";
    let results: Vec<MatchResult> = (0..5)
        .map(|_| match_against_vocabulary(text, &words))
        .collect();
    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_offsets_point_into_pointed_text() {
    let text = "הַיֶּלֶד הָלַךְ";
    let tokens: Vec<_> = HebrewAnalyzer::new().analyze(text).unwrap().collect();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "הילד");
    assert_eq!(&text[tokens[0].start_offset..tokens[0].end_offset], "הַיֶּלֶד");
    assert_eq!(tokens[1].text, "הלך");
    assert_eq!(&text[tokens[1].start_offset..tokens[1].end_offset], "הָלַךְ");
}

#[test]
fn test_batch_equals_sequential() {
    let words = word_bank();
    let texts: Vec<String> = (0..20)
        .map(|i| match i % 3 {
            0 => "והילד הלך לבית הגדול.".to_string(),
            1 => format!("ללכת {i} פעמים"),
            _ => String::new(),
        })
        .collect();
    let matcher = VocabularyMatcher::new();

    let batch = matcher.match_batch(&texts, &words);
    let sequential: Vec<MatchResult> = texts
        .iter()
        .map(|text| matcher.match_text(text, &words))
        .collect();
    assert_eq!(batch, sequential);
}

#[test]
fn test_summary_flow() {
    let headline = "הילד הגדול";
    let summary = "הילד הלך לעיר.";
    let text = compose_source_text(headline, summary);
    let result = match_against_vocabulary(&text, &word_bank());

    assert_eq!(result.tokens, vec!["הילד", "הגדול", "הלך", "לעיר"]);
    assert_eq!(result.prompt_tokens(30), ["הלך", "לעיר"]);

    let response = r#"{"vocabularyWords": [
        {"hebrew": "הלך", "translation": "fue", "wordType": "verb", "infinitive": "ללכת"},
        {"hebrew": "לעיר", "translation": "a la ciudad", "wordType": "noun"},
        {"hebrew": "הילד", "translation": "el chico", "wordType": "noun"}
    ]}"#;
    let generated = parse_generated_vocabulary(response).unwrap();
    let vocabulary = merge_vocabulary(result.known_vocab.clone(), generated);

    assert_eq!(vocabulary.len(), 4);
    let child = vocabulary.iter().find(|e| e.hebrew == "הילד").unwrap();
    assert_eq!(child.translation, "niño");
    let went = vocabulary.iter().find(|e| e.hebrew == "הלך").unwrap();
    assert_eq!(went.word_type, WordType::Verb);

    let segments = ReadingHighlighter::new()
        .highlight(&text, &result, &vocabulary)
        .unwrap();
    let tokens: Vec<(&str, SegmentKind)> = segments
        .iter()
        .filter(|s| s.is_token())
        .map(|s| (s.text.as_str(), s.kind))
        .collect();
    assert_eq!(
        tokens,
        vec![
            ("הילד", SegmentKind::Known),
            ("הגדול", SegmentKind::Known),
            ("הילד", SegmentKind::Known),
            ("הלך", SegmentKind::New),
            ("לעיר", SegmentKind::New),
        ]
    );
    let joined: String = segments.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(joined, text);
}

#[test]
fn test_merge_prefers_known_entries() {
    let known = vec![VocabularyEntry::new("הילד", "niño", WordType::Other)];
    let generated = vec![VocabularyEntry::new("הילד", "el chico", WordType::Noun)];
    let merged = merge_vocabulary(known, generated);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].translation, "niño");
}
