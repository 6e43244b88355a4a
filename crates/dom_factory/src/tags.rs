//! One builder method per standard HTML tag, so call sites read `factory.div(..)`.
//!
//! Custom elements (anything with a hyphen) have no method here; use `build`.
use crate::descriptor::Properties;
use crate::error::FactoryError;
use crate::factory::ElementFactory;
use dom::{DocumentHost, Node};

macro_rules! tag_methods {
    ($($tag:ident),* $(,)?) => {
        impl<H: DocumentHost> ElementFactory<H> {
            /// Tag names that have a generated builder method.
            pub const TAG_METHODS: &'static [&'static str] = &[$(stringify!($tag)),*];

            $(
                #[doc = concat!("`build(\"", stringify!($tag), "\", ..)`")]
                pub fn $tag(
                    &self,
                    properties: &Properties,
                    classes: &[&str],
                    text_content: &str,
                ) -> Result<Node, FactoryError> {
                    self.build(stringify!($tag), properties, classes, text_content)
                }
            )*
        }
    };
}

tag_methods!(
    a, abbr, address, area, article, aside, audio, b, bdi, bdo, blockquote, body, br, button,
    canvas, caption, cite, code, col, colgroup, data, datalist, dd, del, details, dfn, dialog,
    div, dl, dt, em, embed, fieldset, figcaption, figure, footer, form, h1, h2, h3, h4, h5, h6,
    header, hgroup, hr, i, iframe, img, input, ins, kbd, label, legend, li, main, mark, menu,
    meter, nav, noscript, object, ol, optgroup, option, output, p, picture, pre, progress, q,
    rp, rt, ruby, s, samp, search, section, select, slot, small, source, span, strong, sub,
    summary, sup, table, tbody, td, template, textarea, tfoot, th, thead, time, tr, track, u,
    ul, var, video, wbr,
    // document metadata
    base, head, html, link, meta, script, style, title,
);

#[cfg(test)]
mod tests {
    use crate::tag::is_valid_tag;
    use crate::{ElementFactory, Properties};
    use dom::NodeAllocator;

    #[test]
    fn every_generated_method_names_a_valid_tag() {
        for tag in ElementFactory::<NodeAllocator>::TAG_METHODS {
            assert!(is_valid_tag(tag), "{tag}");
        }
    }

    #[test]
    fn generated_method_matches_explicit_build() {
        let f = ElementFactory::<NodeAllocator>::default();
        let props = Properties::new().set("for", "x");
        let a = f.label(&props, &["c"], "hi").unwrap();
        let b = f.build("label", &props, &["c"], "hi").unwrap();
        assert_eq!(a.name(), b.name());
        assert_eq!(a.attr("for"), b.attr("for"));
        assert_eq!(a.class_list(), b.class_list());
        assert_eq!(a.text_content(), b.text_content());
        assert_ne!(a.id(), b.id());
    }
}
