use std::collections::HashMap;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Ident, Path, Type};

/// Implements `axis_vec_ops::Axis` for a fieldless enum, plus `Display` and
/// `FromStr` through the axis name.
#[proc_macro_derive(Axis)]
pub fn axis_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_axis(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Implements `axis_vec_ops::AxisVector` for a struct of named `f32` fields.
///
/// Field `foo_bar` is bound to variant `FooBar` of the enum given in
/// `#[axis_vector(axis = ...)]`. Also generates `Index`/`IndexMut` by axis,
/// the `+= -= *= /=` operators for scalars and same-shaped vectors, and
/// conversions to and from `[f32; N]` and `nalgebra::SVector<f32, N>`, laid
/// out in axis order.
#[proc_macro_derive(AxisVector, attributes(axis_vector))]
pub fn axis_vector_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_axis_vector(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_axis(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(&input.generics, "Axis enums cannot be generic"));
    }

    let variants = match &input.data {
        Data::Enum(data_enum) => &data_enum.variants,
        _ => return Err(syn::Error::new_spanned(name, "Axis can only be derived for enums")),
    };

    if variants.is_empty() {
        return Err(syn::Error::new_spanned(name, "an axis enumeration needs at least one variant"));
    }

    if let Some(variant) = variants.iter().find(|v| !matches!(v.fields, Fields::Unit)) {
        return Err(syn::Error::new_spanned(variant, "Axis variants cannot carry fields"));
    }

    let idents: Vec<_> = variants.iter().map(|v| &v.ident).collect();

    let name_arms = idents.iter().map(|ident| {
        let axis_name = to_snake_case(&ident.unraw().to_string());
        quote! { Self::#ident => #axis_name }
    });

    let index_arms = idents.iter().enumerate().map(|(i, ident)| {
        quote! { Self::#ident => #i }
    });

    Ok(quote! {
        impl ::axis_vec_ops::Axis for #name {
            const ALL: &'static [Self] = &[#(Self::#idents),*];

            fn name(self) -> &'static str {
                match self {
                    #(#name_arms),*
                }
            }

            fn index(self) -> usize {
                match self {
                    #(#index_arms),*
                }
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(::axis_vec_ops::Axis::name(*self))
            }
        }

        impl ::core::str::FromStr for #name {
            type Err = ::axis_vec_ops::AxisError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as ::axis_vec_ops::Axis>::from_name(s)
            }
        }
    })
}

fn expand_axis_vector(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(&input.generics, "AxisVector shapes cannot be generic"));
    }

    let axis = axis_path(input)?;

    let fields = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields_named) => &fields_named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "AxisVector can only be derived for structs with named fields",
                ));
            }
        },
        _ => return Err(syn::Error::new_spanned(name, "AxisVector can only be derived for structs")),
    };

    if fields.is_empty() {
        return Err(syn::Error::new_spanned(name, "a shape needs at least one field"));
    }

    for field in fields {
        if !is_f32(&field.ty) {
            return Err(syn::Error::new_spanned(&field.ty, "AxisVector fields must be f32"));
        }
    }

    let field_names: Vec<&Ident> = fields.iter().filter_map(|f| f.ident.as_ref()).collect();
    let variants: Vec<Ident> = field_names
        .iter()
        .map(|f| Ident::new(&to_upper_camel_case(&f.unraw().to_string()), f.span()))
        .collect();

    let mut claimed: HashMap<String, &Ident> = HashMap::new();
    for (variant, field) in variants.iter().zip(field_names.iter().copied()) {
        if let Some(first) = claimed.insert(variant.to_string(), field) {
            return Err(syn::Error::new_spanned(
                field,
                format!("fields `{first}` and `{field}` both map to axis `{variant}`"),
            ));
        }
    }

    // Conversions go through `from_fn`/`get` so arrays follow axis order,
    // not field declaration order.
    let n_literal = syn::Index::from(field_names.len());

    let get_arms = variants.iter().zip(&field_names).map(|(variant, field)| {
        quote! { #axis::#variant => self.#field }
    });

    let ref_arms = variants.iter().zip(&field_names).map(|(variant, field)| {
        quote! { #axis::#variant => &self.#field }
    });

    let mut_arms: Vec<_> = variants
        .iter()
        .zip(&field_names)
        .map(|(variant, field)| quote! { #axis::#variant => &mut self.#field })
        .collect();

    let from_fn_fields = variants.iter().zip(&field_names).map(|(variant, field)| {
        quote! { #field: f(#axis::#variant) }
    });

    let scalar_ops = [
        (quote!(AddAssign), quote!(add_assign), quote!(add_scalar)),
        (quote!(SubAssign), quote!(sub_assign), quote!(sub_scalar)),
        (quote!(MulAssign), quote!(mul_assign), quote!(multiply_scalar)),
        (quote!(DivAssign), quote!(div_assign), quote!(divide_scalar)),
    ]
    .into_iter()
    .map(|(op, method, engine_fn)| {
        quote! {
            impl ::core::ops::#op<f32> for #name {
                fn #method(&mut self, rhs: f32) {
                    ::axis_vec_ops::AxisVector::#engine_fn(self, rhs);
                }
            }
        }
    });

    let vector_ops = [
        (quote!(AddAssign), quote!(add_assign), quote!(add_vector)),
        (quote!(SubAssign), quote!(sub_assign), quote!(sub_vector)),
        (quote!(MulAssign), quote!(mul_assign), quote!(multiply_vector)),
        (quote!(DivAssign), quote!(div_assign), quote!(divide_vector)),
    ]
    .into_iter()
    .map(|(op, method, engine_fn)| {
        quote! {
            impl ::core::ops::#op<#name> for #name {
                fn #method(&mut self, rhs: #name) {
                    ::axis_vec_ops::AxisVector::#engine_fn(self, &rhs);
                }
            }
        }
    });

    Ok(quote! {
        impl ::axis_vec_ops::AxisVector for #name {
            type Axis = #axis;

            #[inline]
            fn get(&self, axis: #axis) -> f32 {
                match axis {
                    #(#get_arms),*
                }
            }

            #[inline]
            fn axis_mut(&mut self, axis: #axis) -> &mut f32 {
                match axis {
                    #(#mut_arms),*
                }
            }

            fn from_fn<F>(mut f: F) -> Self
            where
                F: FnMut(#axis) -> f32,
            {
                Self {
                    #(#from_fn_fields),*
                }
            }
        }

        impl ::core::ops::Index<#axis> for #name {
            type Output = f32;

            fn index(&self, axis: #axis) -> &f32 {
                match axis {
                    #(#ref_arms),*
                }
            }
        }

        impl ::core::ops::IndexMut<#axis> for #name {
            fn index_mut(&mut self, axis: #axis) -> &mut f32 {
                match axis {
                    #(#mut_arms),*
                }
            }
        }

        #(#scalar_ops)*

        #(#vector_ops)*

        impl ::core::convert::From<[f32; #n_literal]> for #name {
            fn from(values: [f32; #n_literal]) -> Self {
                <Self as ::axis_vec_ops::AxisVector>::from_fn(|axis| {
                    values[<#axis as ::axis_vec_ops::Axis>::index(axis)]
                })
            }
        }

        impl ::core::convert::From<#name> for [f32; #n_literal] {
            fn from(v: #name) -> Self {
                ::core::array::from_fn(|i| {
                    ::axis_vec_ops::AxisVector::get(&v, <#axis as ::axis_vec_ops::Axis>::ALL[i])
                })
            }
        }

        impl ::core::convert::From<::axis_vec_ops::nalgebra::SVector<f32, #n_literal>> for #name {
            fn from(v: ::axis_vec_ops::nalgebra::SVector<f32, #n_literal>) -> Self {
                <Self as ::axis_vec_ops::AxisVector>::from_fn(|axis| {
                    v[<#axis as ::axis_vec_ops::Axis>::index(axis)]
                })
            }
        }

        impl ::core::convert::From<#name> for ::axis_vec_ops::nalgebra::SVector<f32, #n_literal> {
            fn from(v: #name) -> Self {
                ::axis_vec_ops::nalgebra::SVector::from(<[f32; #n_literal]>::from(v))
            }
        }
    })
}

fn axis_path(input: &DeriveInput) -> syn::Result<Path> {
    let mut axis = None;
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("axis_vector")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("axis") {
                if axis.is_some() {
                    return Err(meta.error("duplicate `axis`"));
                }
                axis = Some(meta.value()?.parse::<Path>()?);
                Ok(())
            } else {
                Err(meta.error("expected `axis = <enum path>`"))
            }
        })?;
    }
    axis.ok_or_else(|| {
        syn::Error::new_spanned(&input.ident, "missing #[axis_vector(axis = ...)] attribute")
    })
}

fn is_f32(ty: &Type) -> bool {
    matches!(ty, Type::Path(p) if p.qself.is_none() && p.path.is_ident("f32"))
}

// `FieldOfView` -> `field_of_view`, `X` -> `x`
fn to_snake_case(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev != '_' && (prev.is_lowercase() || prev.is_ascii_digit() || next_is_lower) {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }
    out
}

// `field_of_view` -> `FieldOfView`
fn to_upper_camel_case(ident: &str) -> String {
    ident
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
