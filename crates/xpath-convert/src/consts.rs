/// Namespace URI permanently bound to the `xml` prefix.
pub const XML_URI: &str = "http://www.w3.org/XML/1998/namespace";
/// Namespace URI of namespace declarations themselves (`xmlns`).
pub const XMLNS_URI: &str = "http://www.w3.org/2000/xmlns/";
/// Namespace URI used for W3C-defined XPath/XQuery error codes (xqt-errors).
pub const ERR_NS: &str = "http://www.w3.org/2005/xqt-errors";
/// Reserved prefix of the implicit XML namespace binding.
pub const XML_PREFIX: &str = "xml";
