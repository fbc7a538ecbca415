//! Element interfaces
//!
//! The constructor hierarchy behind element tags, i.e. what
//! `document.createElement(tag).constructor` resolves to and what it inherits
//! from.

/// Element interface (constructor) for a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementInterface {
    Element,
    HtmlElement,
    HtmlAnchorElement,
    HtmlButtonElement,
    HtmlDialogElement,
    HtmlDivElement,
    HtmlFormElement,
    HtmlHeadingElement,
    HtmlImageElement,
    HtmlInputElement,
    HtmlLIElement,
    HtmlParagraphElement,
    HtmlSelectElement,
    HtmlSpanElement,
    HtmlTableCellElement,
    HtmlTableRowElement,
    HtmlTextAreaElement,
    HtmlUListElement,
    HtmlUnknownElement,
    SvgElement,
    SvgSvgElement,
    MathMlElement,
}

/// HTML tags whose constructor is `HTMLElement` itself
const PLAIN_HTML: &[&str] = &[
    "abbr", "address", "article", "aside", "b", "bdi", "bdo", "cite", "code", "dd", "dfn",
    "dt", "em", "figcaption", "figure", "footer", "header", "hgroup", "i", "kbd", "main",
    "mark", "nav", "noscript", "rp", "rt", "ruby", "s", "samp", "section", "small", "strong",
    "sub", "summary", "sup", "u", "var", "wbr",
];

/// SVG tags recognised by the host
const SVG_TAGS: &[&str] = &[
    "circle", "defs", "ellipse", "g", "line", "path", "polygon", "polyline", "rect", "text", "use",
];

impl ElementInterface {
    /// Resolve the interface a freshly created `<tag>` would have.
    ///
    /// Unrecognised tags follow HTML parsing rules: names with a hyphen are
    /// potential custom elements (`HTMLElement`), anything else is
    /// `HTMLUnknownElement`.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.to_ascii_lowercase();
        match tag.as_str() {
            "a" => Self::HtmlAnchorElement,
            "button" => Self::HtmlButtonElement,
            "dialog" => Self::HtmlDialogElement,
            "div" => Self::HtmlDivElement,
            "form" => Self::HtmlFormElement,
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Self::HtmlHeadingElement,
            "img" => Self::HtmlImageElement,
            "input" => Self::HtmlInputElement,
            "li" => Self::HtmlLIElement,
            "p" => Self::HtmlParagraphElement,
            "select" => Self::HtmlSelectElement,
            "span" => Self::HtmlSpanElement,
            "td" | "th" => Self::HtmlTableCellElement,
            "tr" => Self::HtmlTableRowElement,
            "textarea" => Self::HtmlTextAreaElement,
            "ul" => Self::HtmlUListElement,
            "svg" => Self::SvgSvgElement,
            "math" => Self::MathMlElement,
            t if SVG_TAGS.contains(&t) => Self::SvgElement,
            t if PLAIN_HTML.contains(&t) || t.contains('-') => Self::HtmlElement,
            _ => Self::HtmlUnknownElement,
        }
    }

    /// Interface name as exposed to scripts
    pub fn name(self) -> &'static str {
        match self {
            Self::Element => "Element",
            Self::HtmlElement => "HTMLElement",
            Self::HtmlAnchorElement => "HTMLAnchorElement",
            Self::HtmlButtonElement => "HTMLButtonElement",
            Self::HtmlDialogElement => "HTMLDialogElement",
            Self::HtmlDivElement => "HTMLDivElement",
            Self::HtmlFormElement => "HTMLFormElement",
            Self::HtmlHeadingElement => "HTMLHeadingElement",
            Self::HtmlImageElement => "HTMLImageElement",
            Self::HtmlInputElement => "HTMLInputElement",
            Self::HtmlLIElement => "HTMLLIElement",
            Self::HtmlParagraphElement => "HTMLParagraphElement",
            Self::HtmlSelectElement => "HTMLSelectElement",
            Self::HtmlSpanElement => "HTMLSpanElement",
            Self::HtmlTableCellElement => "HTMLTableCellElement",
            Self::HtmlTableRowElement => "HTMLTableRowElement",
            Self::HtmlTextAreaElement => "HTMLTextAreaElement",
            Self::HtmlUListElement => "HTMLUListElement",
            Self::HtmlUnknownElement => "HTMLUnknownElement",
            Self::SvgElement => "SVGElement",
            Self::SvgSvgElement => "SVGSVGElement",
            Self::MathMlElement => "MathMLElement",
        }
    }

    /// Direct parent interface
    pub fn parent(self) -> Option<Self> {
        match self {
            Self::Element => None,
            Self::HtmlElement | Self::SvgElement | Self::MathMlElement => Some(Self::Element),
            Self::SvgSvgElement => Some(Self::SvgElement),
            _ => Some(Self::HtmlElement),
        }
    }

    /// Whether `self` is `ancestor` or inherits from it
    pub fn derives_from(self, ancestor: Self) -> bool {
        let mut current = Some(self);
        while let Some(interface) = current {
            if interface == ancestor {
                return true;
            }
            current = interface.parent();
        }
        false
    }

    /// Whether this interface is `HTMLElement` or a subtype of it
    #[inline]
    pub fn is_html(self) -> bool {
        self.derives_from(Self::HtmlElement)
    }
}
