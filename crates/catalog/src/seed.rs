//! Storefront seed catalog.

use crate::price::Price;
use crate::product::NewProduct;

fn item(
    name: &str,
    description: &str,
    cents: u64,
    condition: &str,
    size: &str,
    category: &str,
    image_url: &str,
) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: description.to_string(),
        price: Price::from_cents(cents),
        condition: condition.to_string(),
        size: size.to_string(),
        category: category.to_string(),
        image_url: image_url.to_string(),
        in_stock: true,
    }
}

/// The six pieces the storefront opens with, in display order.
pub fn storefront_products() -> Vec<NewProduct> {
    vec![
        item(
            "Jaqueta Jeans Vintage",
            "Jaqueta jeans vintage em excelente estado. Cor azul clássica, corte reto, perfeita para compor looks casuais. Possui bolsos frontais e fechamento em botões. Material: 100% algodão.",
            4500,
            "Muito Boa",
            "M",
            "Jaquetas",
            "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=400&h=300",
        ),
        item(
            "Vestido Floral Retrô",
            "Vestido floral retrô com estampa delicada. Tecido leve e confortável, perfeito para o verão. Comprimento midi com detalhes em renda.",
            3800,
            "Excelente",
            "P",
            "Vestidos",
            "https://images.unsplash.com/photo-1515372039744-b8f02a3ae446?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=400&h=300",
        ),
        item(
            "Camiseta Band Vintage",
            "Camiseta vintage de banda de rock com gráficos autênticos. Tecido macio e confortável, perfeita para looks despojados.",
            2500,
            "Boa",
            "G",
            "Camisetas",
            "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=400&h=300",
        ),
        item(
            "Calça Jeans High Waist",
            "Calça jeans de cintura alta no estilo vintage. Corte reto e comprimento regular. Combina com diversos tipos de blusa.",
            5200,
            "Muito Boa",
            "M",
            "Calças",
            "https://images.unsplash.com/photo-1542272604-787c3835535d?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=400&h=300",
        ),
        item(
            "Jaqueta de Couro Vintage",
            "Jaqueta de couro marrom vintage em excelente estado. Design clássico que nunca sai de moda. Forro interno em tecido.",
            8900,
            "Excelente",
            "M",
            "Jaquetas",
            "https://images.unsplash.com/photo-1520975954732-35dd22299614?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=400&h=300",
        ),
        item(
            "Blusa Boho Vintage",
            "Blusa estilo boho com estampas únicas e detalhes bordados. Tecido fluido e confortável, ideal para looks românticos.",
            3200,
            "Boa",
            "P",
            "Camisetas",
            "https://images.unsplash.com/photo-1434389677669-e08b4cac3105?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=400&h=300",
        ),
    ]
}
