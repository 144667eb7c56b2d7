// End-to-end OSIS to HTML conversion through the parser

use osis_html::converters::osis_to_html::convert_osis_to_html_with_pool;
use osis_html::models::{BookmarkStyle, NoteType, OsisToHtmlParameters, VerseNumberStyle};
use osis_html::{convert_osis_to_html, ConversionError, HtmlConversion, OsisReferenceResolver, ParserPool};

fn convert(xml: &str, params: &OsisToHtmlParameters) -> HtmlConversion {
    convert_osis_to_html(xml, params, &OsisReferenceResolver).expect("conversion should succeed")
}

fn html(xml: &str) -> String {
    convert(xml, &OsisToHtmlParameters::default()).html
}

fn strongs_params() -> OsisToHtmlParameters {
    OsisToHtmlParameters {
        show_strongs: true,
        show_morphology: true,
        ..Default::default()
    }
}

// ============================================================================
// Paragraph milestones
// ============================================================================

#[test]
fn test_paragraph_pair_closes_with_marker() {
    let xml = "<div type='paragraph' sID='p1'/>In the beginning<div type='paragraph' eID='p1'/>";
    assert_eq!(html(xml), "In the beginning<p />");
}

#[test]
fn test_legacy_paragraph_type_gives_same_output() {
    let canonical = html("<div type='paragraph' sID='p1'/>In the beginning<div type='paragraph' eID='p1'/>");
    let legacy = html("<div type='x-p' sID='p1'/>In the beginning<div type='x-p' eID='p1'/>");
    assert_eq!(canonical, legacy);
}

#[test]
fn test_empty_paragraph_span_emits_nothing() {
    assert_eq!(html("<div type='paragraph' sID='p1'/><div type='paragraph' eID='p1'/>"), "");
    assert_eq!(
        html("Before<div type='paragraph' sID='p1'/><div type='paragraph' eID='p1'/>"),
        "Before",
        "an empty span after text must not add a paragraph marker"
    );
}

#[test]
fn test_repeated_end_milestone_is_ignored() {
    let xml = "<div type='paragraph' sID='p1'/>text<div type='paragraph' eID='p1'/><div type='paragraph' eID='p1'/>";
    assert_eq!(html(xml), "text<p />");
}

#[test]
fn test_dangling_end_milestone_is_ignored() {
    assert_eq!(html("text<div type='paragraph' eID='never-opened'/>"), "text");
}

#[test]
fn test_unterminated_paragraph_is_closed_at_end() {
    assert_eq!(html("<div type='paragraph' sID='p1'/>text"), "text<p />");
}

#[test]
fn test_container_paragraph() {
    assert_eq!(html("<div type='paragraph'>first</div><div type='paragraph'>second</div>"), "first<p />second<p />");
}

#[test]
fn test_chapter_of_verses_and_paragraphs() {
    let verse_count = 5;
    let mut xml = String::from("<chapter osisID='Gen.1'>");
    for v in 1..=verse_count {
        xml.push_str(&format!(
            "<div type='paragraph' sID='p{v}'/><verse osisID='Gen.1.{v}'>Verse {v} text.</verse><div type='paragraph' eID='p{v}'/>"
        ));
    }
    xml.push_str("</chapter>");

    let html = html(&xml);

    assert_eq!(html.matches("<p />").count(), verse_count, "{}", html);
    assert_eq!(html.matches("class='verseNo'").count(), verse_count, "{}", html);

    let mut last_position = 0;
    for v in 1..=verse_count {
        let marker = format!("<span class='verseNo'>{}</span>", v);
        let position = html.find(&marker).unwrap_or_else(|| panic!("missing marker for verse {}", v));
        assert!(position >= last_position, "verse {} out of order in {}", v, html);
        last_position = position;
    }
}

// ============================================================================
// Pre-verse content
// ============================================================================

#[test]
fn test_pre_verse_milestone_moves_before_verse_marker() {
    let params = OsisToHtmlParameters {
        verse_number_style: VerseNumberStyle::Inline,
        ..Default::default()
    };
    let xml = "<verse osisID='Gen.1.1'>\
               <div type='section' subType='x-preverse' sID='pv1'/>Preverse text\
               <div type='section' subType='x-preverse' eID='pv1'/>Verse content</verse>";
    assert_eq!(
        convert(xml, &params).html,
        "Preverse text<span class='verse' id='1.1'><span class='verseNo'>1</span>&#160;Verse content</span>"
    );
}

#[test]
fn test_title_at_verse_start_moves_before_marker() {
    let xml = "<verse osisID='Gen.1.1'><title>The Creation</title>In the beginning</verse>";
    assert_eq!(
        html(xml),
        "<h1 class='heading1'>The Creation</h1><span class='verse' id='1.1'><span class='verseNo'>1</span>&#160;In the beginning</span>"
    );
}

#[test]
fn test_unterminated_pre_verse_does_not_swallow_next_verse() {
    let xml = "<verse osisID='Gen.1.1'><div subType='x-preverse' sID='pv1'/>Heading</verse>\
               <verse osisID='Gen.1.2'>Second</verse>";
    let html = html(xml);
    let heading = html.find("Heading").expect("heading kept");
    let second = html.find("Second").expect("second verse kept");
    assert!(heading < second, "{}", html);
}

// ============================================================================
// Strong's numbers and morphology
// ============================================================================

#[test]
fn test_strongs_number_only() {
    let result = convert("<w lemma='strong:H07225'>In the beginning</w>", &strongs_params());
    assert_eq!(result.html, "In the beginning <a href='hdef:07225' class='strongs'>07225</a> ");
}

#[test]
fn test_multiple_strongs_numbers_with_morphology() {
    let result = convert(
        "<w lemma='strong:H0853 strong:H01254' morph='robinson:N-PRI'>text</w>",
        &strongs_params(),
    );
    assert_eq!(
        result.html,
        "text <a href='hdef:01254' class='strongs'>01254</a> <a href='hdef:00853' class='strongs'>0853</a><a href='robinson:N-PRI' class='morphology'>N-PRI</a> "
    );
}

#[test]
fn test_unrecognized_morphology_without_lemma() {
    let result = convert("<w morph='strongMorph:TH8804'>created</w>", &strongs_params());
    assert!(result.html.contains("class='morphology'"), "{}", result.html);
    assert!(!result.html.contains("class='strongs'"), "{}", result.html);
}

#[test]
fn test_strongs_references_in_text_become_links() {
    let params = OsisToHtmlParameters {
        convert_strongs_refs_to_links: true,
        ..Default::default()
    };
    let result = convert("God; see HEBREW for 0433", &params);
    assert_eq!(
        result.html,
        "God; <a href='hdef:00433' class='strongs'>see HEBREW for 0433</a>"
    );
}

// ============================================================================
// Verses
// ============================================================================

#[test]
fn test_verses_are_separated_by_a_space() {
    let xml = "<verse osisID='John.3.16'>For God</verse><verse osisID='John.3.17'>For God sent</verse>";
    assert_eq!(
        html(xml),
        "<span class='verse' id='3.16'><span class='verseNo'>16</span>&#160;For God</span> \
         <span class='verse' id='3.17'><span class='verseNo'>17</span>&#160;For God sent</span>"
    );
}

#[test]
fn test_empty_verse_leaves_no_marker() {
    assert_eq!(html("<verse osisID='Gen.1.1'></verse>"), "");
}

#[test]
fn test_paragraph_closed_inside_empty_verse_keeps_break() {
    let xml = "<div type='paragraph' sID='p1'/>Intro<verse osisID='Acts.8.37'><div type='paragraph' eID='p1'/></verse>\
               <verse osisID='Acts.8.38'>Next</verse>";
    assert_eq!(
        html(xml),
        "Intro<p /> <span class='verse' id='8.38'><span class='verseNo'>38</span>&#160;Next</span>"
    );
}

#[test]
fn test_verse_holding_only_a_note_keeps_its_marker() {
    let params = OsisToHtmlParameters {
        show_notes: true,
        ..Default::default()
    };
    let result = convert("<verse osisID='Gen.1.1'><note>Or, when</note></verse>", &params);
    assert!(result.html.contains("<span class='verse' id='1.1'>"), "{}", result.html);
    assert!(result.html.contains("class='noteRef'>1a</a>"), "{}", result.html);
    assert_eq!(result.notes.len(), 1);
    assert_eq!(result.notes[0].reference, "1a");
}

#[test]
fn test_milestone_verses() {
    let xml = "<verse sID='Gen.1.1' osisID='Gen.1.1'/>In the beginning<verse eID='Gen.1.1'/>";
    assert_eq!(
        html(xml),
        "<span class='verse' id='1.1'><span class='verseNo'>1</span>&#160;In the beginning</span>"
    );
}

#[test]
fn test_bookmark_classes_on_verse() {
    let mut params = OsisToHtmlParameters {
        show_bookmarks: true,
        ..Default::default()
    };
    params
        .bookmark_styles_by_verse
        .insert(2, [BookmarkStyle::RedHighlight].into_iter().collect());
    let html = convert("<verse osisID='Gen.1.2'>And the earth</verse>", &params).html;
    assert!(html.starts_with("<span class='verse bookmark-red-highlight' id='1.2'>"), "{}", html);
}

#[test]
fn test_hidden_verse_numbers_leave_position_marker() {
    let params = OsisToHtmlParameters {
        show_verse_numbers: false,
        ..Default::default()
    };
    let html = convert("<verse osisID='Gen.1.1'>In</verse>", &params).html;
    assert_eq!(
        html,
        "<span class='verse' id='1.1'><span class='verseNo position-marker'>&#x200b;</span>In</span>"
    );
}

// ============================================================================
// Notes and references
// ============================================================================

#[test]
fn test_notes_are_collected_on_the_side() {
    let params = OsisToHtmlParameters {
        show_notes: true,
        basis_ref: Some("Gen.1".to_string()),
        ..Default::default()
    };
    let result = convert(
        "<verse osisID='Gen.1.1'>In the beginning<note n='a'>Or, when</note> God</verse>",
        &params,
    );
    assert!(
        result.html.contains("In the beginning<a href='note:Gen.1/a' class='noteRef'>a</a>  God"),
        "{}",
        result.html
    );
    assert_eq!(result.notes.len(), 1);
    assert_eq!(result.notes[0].verse_number, 1);
    assert_eq!(result.notes[0].body_text, "Or, when");
    assert_eq!(result.notes[0].kind, NoteType::General);
}

#[test]
fn test_cross_references_inside_note() {
    let params = OsisToHtmlParameters {
        show_notes: true,
        basis_ref: Some("Mark.6".to_string()),
        ..Default::default()
    };
    let xml = "<verse osisID='Mark.6.3'>Is not this the carpenter\
               <note type='crossReference'><reference osisRef='Matt.13.55'>Mt 13:55</reference>; \
               <reference osisRef='John.6.42'>Jn 6:42</reference></note></verse>";
    let result = convert(xml, &params);

    let targets: Vec<_> = result.notes.iter().map(|n| n.target_key.as_deref()).collect();
    assert_eq!(targets, vec![Some("Matt.13.55"), Some("John.6.42")]);
    assert!(result.notes.iter().all(|n| n.kind == NoteType::CrossReference));
    assert!(!result.html.contains("Mt 13:55"), "note text must not reach the body: {}", result.html);
}

#[test]
fn test_reference_outside_note_is_a_link() {
    let html = html("(<reference osisRef='Exod.15.1-Exod.15.19'>Ex. 15:1-19</reference>)");
    assert_eq!(html, "(<a href='bible:Exod.15.1-Exod.15.19'>Ex. 15:1-19</a>)");
}

// ============================================================================
// Other markup
// ============================================================================

#[test]
fn test_hidden_titles_write_nothing() {
    let params = OsisToHtmlParameters {
        show_titles: false,
        ..Default::default()
    };
    assert_eq!(convert("<title>Heading</title>text", &params).html, "text");
}

#[test]
fn test_red_letter_words() {
    let params = OsisToHtmlParameters {
        red_letter: true,
        ..Default::default()
    };
    let html = convert("said, <q who='Jesus'>Follow me</q>", &params).html;
    assert_eq!(html, "said, <span class='redLetter'>Follow me</span>");
}

#[test]
fn test_poetry_lines() {
    let html = html("<lg><l>The LORD is my shepherd;</l><l type='x-indent'>I shall not want.</l></lg>");
    assert_eq!(
        html,
        "The LORD is my shepherd;<br />&#160;&#160;I shall not want.<br /><br />"
    );
}

#[test]
fn test_entities_are_escaped_again() {
    assert_eq!(html("Fish &amp; loaves &lt;5&gt;"), "Fish &amp; loaves &lt;5&gt;");
}

// ============================================================================
// Errors and pooling
// ============================================================================

#[test]
fn test_malformed_xml_is_a_parse_error() {
    let result = convert_osis_to_html(
        "text <verse osisID='Gen.1.1'",
        &OsisToHtmlParameters::default(),
        &OsisReferenceResolver,
    );
    assert!(matches!(result, Err(ConversionError::Parse(_))), "{:?}", result);
}

#[test]
fn test_parser_returned_to_pool_after_conversion() {
    let pool = ParserPool::new(2);
    let params = OsisToHtmlParameters::default();
    convert_osis_to_html_with_pool("<verse osisID='Gen.1.1'>x</verse>", &params, &OsisReferenceResolver, &pool)
        .expect("conversion should succeed");
    convert_osis_to_html_with_pool("<verse osisID='Gen.1.2'>y</verse>", &params, &OsisReferenceResolver, &pool)
        .expect("conversion should succeed");
    assert_eq!(pool.idle_count(), 1, "the second conversion should reuse the first parser");
}
