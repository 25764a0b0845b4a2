use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Lit, Meta, Type};

/// Derive macro describing the columns of a CSV row struct.
///
/// Each named field becomes a `CsvField` with:
/// - the column name (`#[serde(rename = "...")]` wins over the field name)
/// - whether the column is required (not `Option<T>` and not `#[serde(default)]`)
/// - a description taken from the field's doc comments
///
/// Generates `csv_schema() -> &'static [CsvField]` and `csv_header() -> Vec<&'static str>`.
/// `CsvField` must be in scope where the derive is used.
#[proc_macro_derive(CsvSchema, attributes(serde))]
pub fn derive_csv_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(name, "CsvSchema needs named fields")
                    .to_compile_error()
                    .into()
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "CsvSchema can only be derived for structs")
                .to_compile_error()
                .into()
        }
    };

    let columns: Vec<_> = fields
        .iter()
        .filter_map(|field| {
            let ident = field.ident.as_ref()?;
            let serde = SerdeAttrs::from_attrs(&field.attrs);
            if serde.skip {
                return None;
            }
            let column = serde.rename.unwrap_or_else(|| ident.to_string());
            let required = !serde.default && !is_option_type(&field.ty);
            let doc = get_doc_comment(&field.attrs);
            Some((column, required, doc))
        })
        .collect();

    let field_entries = columns.iter().map(|(column, required, desc)| {
        quote! {
            CsvField {
                name: #column,
                required: #required,
                description: #desc,
            }
        }
    });
    let header = columns.iter().map(|(column, _, _)| quote! { #column });

    let expanded = quote! {
        impl #name {
            pub fn csv_schema() -> &'static [CsvField] {
                static SCHEMA: &[CsvField] = &[
                    #(#field_entries),*
                ];
                SCHEMA
            }

            pub fn csv_header() -> Vec<&'static str> {
                vec![#(#header),*]
            }
        }
    };

    TokenStream::from(expanded)
}

#[derive(Default)]
struct SerdeAttrs {
    rename: Option<String>,
    default: bool,
    skip: bool,
}

impl SerdeAttrs {
    fn from_attrs(attrs: &[syn::Attribute]) -> Self {
        let mut out = SerdeAttrs::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
            // Unknown serde keys are consumed and ignored, serde itself validates them.
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let value: syn::LitStr = meta.value()?.parse()?;
                    out.rename = Some(value.value());
                } else if meta.path.is_ident("default") {
                    out.default = true;
                    if meta.input.peek(syn::Token![=]) {
                        let _: syn::LitStr = meta.value()?.parse()?;
                    }
                } else if meta.path.is_ident("skip") {
                    out.skip = true;
                } else if meta.input.peek(syn::Token![=]) {
                    let _: syn::Expr = meta.value()?.parse()?;
                }
                Ok(())
            });
        }
        out
    }
}

fn get_doc_comment(attrs: &[syn::Attribute]) -> String {
    attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            if let Meta::NameValue(meta) = &attr.meta {
                if let syn::Expr::Lit(expr_lit) = &meta.value {
                    if let Lit::Str(lit_str) = &expr_lit.lit {
                        return Some(lit_str.value().trim().to_string());
                    }
                }
            }
            None
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_option_type(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            return segment.ident == "Option";
        }
    }
    false
}
