pub mod term;

pub use term::{
    PageLinks, PageMeta, SelfLink, TermAttributes, TermDocument, TermResource, TermsDocument,
    TermsQuery,
};
