use super::tree::{XmlElement, parse_document};
use crate::core::AuditError;

/// A parsed NFe document with typed accessors for the audited fields.
///
/// Each block accessor returns the first matching element in document order;
/// each field accessor returns the element's text, or `None` when absent.
#[derive(Debug, Clone)]
pub struct NfeDocument {
    document: XmlElement,
}

impl NfeDocument {
    pub fn parse(xml: &str) -> Result<Self, AuditError> {
        Ok(Self {
            document: parse_document(xml)?,
        })
    }

    /// `ide` block.
    pub fn identification(&self) -> Option<Identification<'_>> {
        self.document.first("ide").map(Identification)
    }

    /// `emit` block.
    pub fn issuer(&self) -> Option<Issuer<'_>> {
        self.document.first("emit").map(Issuer)
    }

    /// `ICMSTot` block.
    pub fn totals(&self) -> Option<Totals<'_>> {
        self.document.first("ICMSTot").map(Totals)
    }

    /// `pag` block.
    pub fn payment(&self) -> Option<Payment<'_>> {
        self.document.first("pag").map(Payment)
    }

    /// Every `detPag` entry, wherever it sits.
    pub fn payment_details(&self) -> impl Iterator<Item = PaymentDetail<'_>> {
        self.document.elements_named("detPag").map(PaymentDetail)
    }

    /// Product of every `det` that has one.
    pub fn products(&self) -> impl Iterator<Item = Product<'_>> {
        self.document
            .elements_named("det")
            .filter_map(|det| det.first("prod"))
            .map(Product)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Identification<'a>(&'a XmlElement);

impl Identification<'_> {
    /// `nNF`
    pub fn number(&self) -> Option<String> {
        self.0.text_of("nNF")
    }

    /// `dhEmi`
    pub fn issued_at(&self) -> Option<String> {
        self.0.text_of("dhEmi")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Issuer<'a>(&'a XmlElement);

impl Issuer<'_> {
    /// `CNPJ`
    pub fn tax_id(&self) -> Option<String> {
        self.0.text_of("CNPJ")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Totals<'a>(&'a XmlElement);

impl Totals<'_> {
    /// `vProd`
    pub fn product_total(&self) -> Option<String> {
        self.0.text_of("vProd")
    }

    /// `vNF`
    pub fn invoice_total(&self) -> Option<String> {
        self.0.text_of("vNF")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Payment<'a>(&'a XmlElement);

impl Payment<'_> {
    /// `vTroco`
    pub fn change(&self) -> Option<String> {
        self.0.text_of("vTroco")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PaymentDetail<'a>(&'a XmlElement);

impl PaymentDetail<'_> {
    /// `vPag`
    pub fn amount(&self) -> Option<String> {
        self.0.text_of("vPag")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Product<'a>(&'a XmlElement);

impl Product<'_> {
    /// `xProd`
    pub fn name(&self) -> Option<String> {
        self.0.text_of("xProd")
    }

    /// `vProd`
    pub fn price(&self) -> Option<String> {
        self.0.text_of("vProd")
    }
}
