use crate::models::Product;

fn product(
    id: u64,
    name: &str,
    description: &str,
    price: f64,
    category: &str,
    image: &str,
    rating: f64,
    reviews: u32,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        image: image.to_string(),
        rating,
        reviews,
    }
}

/// The built-in product catalog. Defined as a literal, loaded once at
/// startup, and immutable for the life of the process.
pub fn products() -> Vec<Product> {
    vec![
        product(
            1,
            "Whey Protein Premium",
            "Proteína de alta qualidade para ganho de massa muscular",
            89.99,
            "Proteínas",
            "https://via.placeholder.com/300x200/4CAF50/white?text=Whey+Protein",
            4.8,
            245,
        ),
        product(
            2,
            "BCAA 2:1:1",
            "Aminoácidos essenciais para recuperação muscular",
            45.99,
            "Aminoácidos",
            "https://via.placeholder.com/300x200/2196F3/white?text=BCAA",
            4.6,
            189,
        ),
        product(
            3,
            "Creatina Monohidratada",
            "Suplemento para força e resistência muscular",
            35.99,
            "Creatina",
            "https://via.placeholder.com/300x200/FF9800/white?text=Creatina",
            4.9,
            312,
        ),
        product(
            4,
            "Multivitamínico Premium",
            "Complexo vitamínico completo para saúde geral",
            55.99,
            "Vitaminas",
            "https://via.placeholder.com/300x200/9C27B0/white?text=Vitaminas",
            4.7,
            156,
        ),
        product(
            5,
            "Ômega 3 Ultra",
            "Ácidos graxos essenciais para saúde cardiovascular",
            42.99,
            "Ômegas",
            "https://via.placeholder.com/300x200/00BCD4/white?text=Omega+3",
            4.5,
            98,
        ),
        product(
            6,
            "Notebook Gamer Alto Desempenho",
            "Notebook para jogos e trabalho pesado",
            2899.99,
            "Eletrônicos",
            "https://via.placeholder.com/300x200/607D8B/white?text=Notebook",
            4.4,
            67,
        ),
    ]
}
