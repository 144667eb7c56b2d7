//! OSIS to HTML conversion
//!
//! Converts one OSIS document (a chapter, a verse range, a dictionary entry)
//! into an HTML fragment for the reading view, collecting footnotes and
//! cross-references into a separate note list.
//!
//! ## Architecture
//!
//! ```text
//! OSIS XML → OsisParser → OsisToHtml (OsisContentHandler)
//!                              ↓ OsisTag dispatch
//!                         TagHandler impls → RenderContext → HtmlTextWriter → HTML
//!                                                          ↘ NoteCollector → Vec<Note>
//! ```
//!
//! The writer is append-only with retroactive insertion records, so content
//! that arrives after a verse marker but belongs before it (section titles)
//! can be placed correctly without rewriting the buffer.

pub mod context;
pub mod handlers;
pub mod milestones;
pub mod notes;
pub mod preprocess;
pub mod state;
pub mod tags;
pub mod writer;

use serde::Serialize;

use crate::converters::errors::Result;
use crate::models::{Note, OsisToHtmlParameters};
use crate::parse::{shared_pool, Attributes, OsisContentHandler, ParserPool};
use crate::references::ReferenceResolver;
use crate::utils::html::{escape_attribute, EM_DASH};

use context::RenderContext;
use handlers::*;
use tags::{is_ignored, OsisTag, TagHandler};

pub use writer::HtmlTextWriter;

/// Result of one HTML conversion
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlConversion {
    pub html: String,
    pub notes: Vec<Note>,
}

/// One handler instance per tag kind, alive for a whole conversion
struct HandlerSet {
    verse: VerseHandler,
    div: DivHandler,
    milestone: MilestoneHandler,
    title: TitleHandler,
    hi: HiHandler,
    note: NoteHandler,
    reference: ReferenceHandler,
    w: StrongsHandler,
    l: LHandler,
    lg: LgHandler,
    lb: LbHandler,
    p: PHandler,
    q: QHandler,
    trans_change: ClassSpanHandler,
    divine_name: ClassSpanHandler,
    figure: FigureHandler,
    table: BlockHandler,
    row: BlockHandler,
    cell: BlockHandler,
    list: BlockHandler,
    item: BlockHandler,
    tei_orth: HiHandler,
    tei_pron: HiHandler,
    tei_ref: ReferenceHandler,
}

impl HandlerSet {
    fn new() -> Self {
        Self {
            verse: VerseHandler::new(),
            div: DivHandler::new(),
            milestone: MilestoneHandler::default(),
            title: TitleHandler::new(),
            hi: HiHandler::osis(),
            note: NoteHandler::new(),
            reference: ReferenceHandler::osis(),
            w: StrongsHandler::new(),
            l: LHandler::new(),
            lg: LgHandler::default(),
            lb: LbHandler::default(),
            p: PHandler::default(),
            q: QHandler::new(),
            trans_change: ClassSpanHandler::trans_change(),
            divine_name: ClassSpanHandler::divine_name(),
            figure: FigureHandler::new(),
            table: BlockHandler::table(),
            row: BlockHandler::row(),
            cell: BlockHandler::cell(),
            list: BlockHandler::list(),
            item: BlockHandler::item(),
            tei_orth: tei::orth(),
            tei_pron: tei::pron(),
            tei_ref: tei::reference(),
        }
    }

    fn handler(&mut self, tag: OsisTag) -> &mut dyn TagHandler {
        match tag {
            OsisTag::Verse => &mut self.verse,
            OsisTag::Div => &mut self.div,
            OsisTag::Milestone => &mut self.milestone,
            OsisTag::Title => &mut self.title,
            OsisTag::Hi => &mut self.hi,
            OsisTag::Note => &mut self.note,
            OsisTag::Reference => &mut self.reference,
            OsisTag::W => &mut self.w,
            OsisTag::L => &mut self.l,
            OsisTag::Lg => &mut self.lg,
            OsisTag::Lb => &mut self.lb,
            OsisTag::P => &mut self.p,
            OsisTag::Q => &mut self.q,
            OsisTag::TransChange => &mut self.trans_change,
            OsisTag::DivineName => &mut self.divine_name,
            OsisTag::Figure => &mut self.figure,
            OsisTag::Table => &mut self.table,
            OsisTag::Row => &mut self.row,
            OsisTag::Cell => &mut self.cell,
            OsisTag::List => &mut self.list,
            OsisTag::Item => &mut self.item,
            OsisTag::TeiOrth => &mut self.tei_orth,
            OsisTag::TeiPron => &mut self.tei_pron,
            OsisTag::TeiRef => &mut self.tei_ref,
        }
    }
}

/// Event consumer producing HTML.
///
/// Drive it with an [`OsisParser`](crate::parse::OsisParser) (or by hand) and
/// call [`finish`](Self::finish) to take the result.
pub struct OsisToHtml<'a> {
    cx: RenderContext<'a>,
    handlers: HandlerSet,
    is_rtl_span_open: bool,
}

impl<'a> OsisToHtml<'a> {
    pub fn new(params: &'a OsisToHtmlParameters, resolver: &'a dyn ReferenceResolver) -> Self {
        Self {
            cx: RenderContext::new(params, resolver),
            handlers: HandlerSet::new(),
            is_rtl_span_open: false,
        }
    }

    pub fn finish(self) -> HtmlConversion {
        HtmlConversion {
            html: self.cx.writer.html(),
            notes: self.cx.notes.into_notes(),
        }
    }

    fn write_document_head(&mut self) {
        let params = self.cx.params;
        let dir = if params.is_left_to_right { "ltr" } else { "rtl" };
        let mut head = format!(
            "<!DOCTYPE html><html lang='{}' dir='{}'><head><meta charset='utf-8'/>",
            escape_attribute(&params.language_code),
            dir
        );
        for stylesheet in &params.css_stylesheets {
            head.push_str(&format!(
                "<link href='{}' rel='stylesheet' type='text/css'/>",
                escape_attribute(stylesheet)
            ));
        }
        head.push_str("</head><body>");
        self.cx.writer.write(&head);
    }

    fn write_document_foot(&mut self) {
        let params = self.cx.params;
        if let Some(footer) = &params.extra_footer {
            self.cx.writer.write(footer);
        }
        self.cx.writer.write("</body></html>");
    }
}

impl OsisContentHandler for OsisToHtml<'_> {
    fn start_document(&mut self) {
        let params = self.cx.params;
        if !params.is_as_fragment {
            self.write_document_head();
        }

        if params.show_chapter_divider {
            if let Some(chapter) = params.chapter {
                self.cx.writer.write(&format!(
                    "<div class='chapterNo'>{} {} {}</div>",
                    EM_DASH, chapter, EM_DASH
                ));
            }
        }

        if !params.is_left_to_right {
            self.cx.writer.write("<span dir='rtl'>");
            self.is_rtl_span_open = true;
        }
    }

    fn start_element(&mut self, name: &str, attrs: &Attributes) {
        match OsisTag::from_name(name) {
            Some(tag) => self.handlers.handler(tag).start(attrs, &mut self.cx),
            None if is_ignored(name) => {}
            None => log::info!(
                "Verse {} unsupported OSIS tag: {}",
                self.cx.verse.current_verse_no,
                name
            ),
        }
    }

    fn characters(&mut self, text: &str) {
        self.cx.write_text(text);
    }

    fn end_element(&mut self, name: &str) {
        if let Some(tag) = OsisTag::from_name(name) {
            self.handlers.handler(tag).end(&mut self.cx);
        }
    }

    fn end_document(&mut self) {
        DivHandler::flush_unterminated(&mut self.cx);
        self.handlers.verse.close_verse(&mut self.cx);

        if self.is_rtl_span_open {
            self.cx.writer.write("</span>");
            self.is_rtl_span_open = false;
        }
        if !self.cx.params.is_as_fragment {
            self.write_document_foot();
        }
    }
}

/// Convert an OSIS document to HTML using the shared parser pool
pub fn convert_osis_to_html(
    xml: &str,
    params: &OsisToHtmlParameters,
    resolver: &dyn ReferenceResolver,
) -> Result<HtmlConversion> {
    convert_osis_to_html_with_pool(xml, params, resolver, shared_pool())
}

/// Convert an OSIS document to HTML with a parser from `pool`
pub fn convert_osis_to_html_with_pool(
    xml: &str,
    params: &OsisToHtmlParameters,
    resolver: &dyn ReferenceResolver,
    pool: &ParserPool,
) -> Result<HtmlConversion> {
    let mut converter = OsisToHtml::new(params, resolver);
    pool.with_parser(|parser| parser.parse(xml, &mut converter))?;
    Ok(converter.finish())
}
