use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, LitStr};

pub fn derive(tokens: proc_macro::TokenStream) -> TokenStream {
	let DeriveInput {
		attrs,
		ident,
		generics,
		data,
		..
	} = syn::parse(tokens).unwrap();

	match data {
		Data::Struct(_) => {},
		Data::Enum(_) => panic!("Enums are not supported"),
		Data::Union(_) => panic!("Unions are not supported"),
	}

	if !generics.params.is_empty() {
		panic!("Generics are not supported");
	}

	let mut partition: Option<LitStr> = None;
	for attr in attrs.iter() {
		if attr.path().is_ident("record") {
			attr.parse_nested_meta(|meta| {
				if meta.path.is_ident("partition") {
					partition = Some(meta.value()?.parse()?);
					Ok(())
				}
				else {
					Err(meta.error("unrecognized record property"))
				}
			})
			.unwrap();
		}
	}

	let Some(partition) = partition else {
		panic!("`{ident}` is missing its #[record(partition = \"...\")] attribute");
	};

	quote! {
		impl Record for #ident {
			const PARTITION: &'static str = #partition;
		}
	}
}
