//! Compiled-in knowledge tables.
//!
//! Declaration order is significant: availability messages list keys in
//! this order and the substring matcher picks the first hit.

/// Recipe summaries for one cuisine, split by difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cuisine {
    pub name: &'static str,
    pub easy: &'static [&'static str],
    pub medium: &'static [&'static str],
    pub hard: &'static [&'static str],
}

/// Ingredient list and timings for one recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngredientRecord {
    pub recipe: &'static str,
    pub ingredients: &'static [&'static str],
    pub servings: &'static str,
    pub prep_time: &'static str,
    pub cook_time: &'static str,
}

/// Tips for one cooking topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipSet {
    pub topic: &'static str,
    pub tips: &'static [&'static str],
}

pub static RECIPE_CATALOG: &[Cuisine] = &[
    Cuisine {
        name: "italian",
        easy: &[
            "Spaghetti Aglio e Olio - Simple pasta with garlic, olive oil, and red pepper flakes (20 min)",
            "Caprese Salad - Fresh tomatoes, mozzarella, basil, and balsamic glaze (10 min)",
            "Bruschetta - Toasted bread topped with tomatoes, garlic, and basil (15 min)",
        ],
        medium: &[
            "Chicken Parmigiana - Breaded chicken with tomato sauce and melted cheese (45 min)",
            "Risotto alla Milanese - Creamy saffron rice dish (40 min)",
            "Lasagna - Layered pasta with meat sauce, béchamel, and cheese (1.5 hours)",
        ],
        hard: &[
            "Osso Buco - Braised veal shanks with gremolata (3 hours)",
            "Homemade Ravioli - Fresh pasta filled with ricotta and spinach (2 hours)",
            "Tiramisu - Classic Italian dessert with coffee and mascarpone (2 hours + chilling)",
        ],
    },
    Cuisine {
        name: "chinese",
        easy: &[
            "Egg Fried Rice - Simple rice with eggs, peas, and soy sauce (15 min)",
            "Stir-Fried Vegetables - Mixed vegetables with garlic and oyster sauce (20 min)",
            "Chinese Cucumber Salad - Refreshing cucumber with vinegar dressing (10 min)",
        ],
        medium: &[
            "Kung Pao Chicken - Spicy chicken with peanuts and vegetables (35 min)",
            "Sweet and Sour Pork - Crispy pork in tangy sauce (40 min)",
            "Mapo Tofu - Spicy tofu and ground pork in chili sauce (30 min)",
        ],
        hard: &[
            "Peking Duck - Crispy roasted duck with pancakes (4 hours)",
            "Dim Sum Dumplings - Steamed dumplings with various fillings (2 hours)",
            "Hot Pot - Interactive meal with various meats and vegetables (2 hours prep)",
        ],
    },
    Cuisine {
        name: "mexican",
        easy: &[
            "Quesadillas - Cheese-filled tortillas, grilled until crispy (15 min)",
            "Guacamole - Mashed avocados with lime, cilantro, and onions (10 min)",
            "Nachos - Tortilla chips with cheese, salsa, and toppings (20 min)",
        ],
        medium: &[
            "Chicken Enchiladas - Rolled tortillas with chicken and cheese sauce (45 min)",
            "Tacos al Pastor - Marinated pork tacos with pineapple (1 hour)",
            "Chiles Rellenos - Stuffed poblano peppers with cheese (50 min)",
        ],
        hard: &[
            "Mole Poblano - Complex sauce with chocolate and chiles (3 hours)",
            "Tamales - Corn dough filled with meat, wrapped in corn husks (3 hours)",
            "Cochinita Pibil - Slow-roasted pork in citrus marinade (4 hours)",
        ],
    },
    Cuisine {
        name: "indian",
        easy: &[
            "Dal Tadka - Lentil curry with spices (30 min)",
            "Raita - Yogurt sauce with cucumber and spices (10 min)",
            "Aloo Gobi - Cauliflower and potato curry (35 min)",
        ],
        medium: &[
            "Butter Chicken - Creamy tomato-based chicken curry (50 min)",
            "Chicken Biryani - Fragrant rice with spiced chicken (1 hour)",
            "Palak Paneer - Spinach curry with cottage cheese (40 min)",
        ],
        hard: &[
            "Rogan Josh - Complex lamb curry with aromatic spices (2.5 hours)",
            "Hyderabadi Biryani - Layered rice and meat dish (3 hours)",
            "Samosas from scratch - Fried pastries with spiced filling (2 hours)",
        ],
    },
];

pub static INGREDIENT_RECORDS: &[IngredientRecord] = &[
    IngredientRecord {
        recipe: "spaghetti aglio e olio",
        ingredients: &[
            "400g spaghetti pasta",
            "6 cloves garlic, thinly sliced",
            "1/2 cup extra virgin olive oil",
            "1 teaspoon red pepper flakes",
            "1/4 cup fresh parsley, chopped",
            "Salt to taste",
            "Freshly ground black pepper",
            "Parmesan cheese (optional, for serving)",
        ],
        servings: "4 people",
        prep_time: "5 minutes",
        cook_time: "15 minutes",
    },
    IngredientRecord {
        recipe: "kung pao chicken",
        ingredients: &[
            "500g chicken breast, diced",
            "2 tablespoons soy sauce",
            "1 tablespoon cornstarch",
            "3 tablespoons vegetable oil",
            "4 dried red chiles, cut into pieces",
            "1 teaspoon Sichuan peppercorns",
            "3 cloves garlic, minced",
            "1 tablespoon ginger, minced",
            "1 bell pepper, diced",
            "1/2 cup roasted peanuts",
            "3 green onions, chopped",
            "2 tablespoons rice vinegar",
            "1 tablespoon sugar",
            "1 tablespoon sesame oil",
        ],
        servings: "4 people",
        prep_time: "15 minutes",
        cook_time: "20 minutes",
    },
    IngredientRecord {
        recipe: "butter chicken",
        ingredients: &[
            "800g chicken thighs, cut into chunks",
            "1 cup plain yogurt",
            "2 tablespoons lemon juice",
            "2 teaspoons garam masala",
            "1 teaspoon turmeric",
            "1 teaspoon chili powder",
            "6 cloves garlic, minced",
            "2 tablespoons ginger, grated",
            "4 tablespoons butter",
            "1 large onion, diced",
            "400g canned tomatoes",
            "1 cup heavy cream",
            "1 tablespoon sugar",
            "Fresh cilantro for garnish",
            "Salt to taste",
        ],
        servings: "6 people",
        prep_time: "20 minutes (plus marinating time)",
        cook_time: "30 minutes",
    },
    IngredientRecord {
        recipe: "chicken enchiladas",
        ingredients: &[
            "3 cups cooked chicken, shredded",
            "8-10 flour or corn tortillas",
            "2 cups enchilada sauce",
            "2 cups shredded cheese (cheddar or Mexican blend)",
            "1/2 cup sour cream",
            "1 can black beans, drained",
            "1 bell pepper, diced",
            "1 onion, diced",
            "2 cloves garlic, minced",
            "1 teaspoon cumin",
            "1 teaspoon chili powder",
            "Fresh cilantro for garnish",
            "Lime wedges for serving",
        ],
        servings: "4-6 people",
        prep_time: "20 minutes",
        cook_time: "25 minutes",
    },
    IngredientRecord {
        recipe: "caprese salad",
        ingredients: &[
            "4 large ripe tomatoes, sliced",
            "400g fresh mozzarella cheese, sliced",
            "Fresh basil leaves",
            "1/4 cup extra virgin olive oil",
            "2 tablespoons balsamic vinegar or glaze",
            "Sea salt flakes",
            "Freshly ground black pepper",
        ],
        servings: "4 people",
        prep_time: "10 minutes",
        cook_time: "0 minutes",
    },
];

pub static TIP_SETS: &[TipSet] = &[
    TipSet {
        topic: "pasta",
        tips: &[
            "Always use a large pot with plenty of salted water (about 1 tablespoon salt per liter)",
            "Don't add oil to the pasta water - it prevents sauce from sticking",
            "Save some pasta water before draining - it helps create creamy sauces",
            "Taste pasta 1-2 minutes before the package time for perfect al dente texture",
            "Don't rinse pasta after cooking unless making a cold pasta salad",
        ],
    },
    TipSet {
        topic: "rice",
        tips: &[
            "Rinse rice before cooking to remove excess starch for fluffier results",
            "Use a 1:2 ratio of rice to water for white rice, 1:2.5 for brown rice",
            "Let rice rest covered for 5-10 minutes after cooking for better texture",
            "Fluff with a fork, not a spoon, to avoid making it sticky",
            "Day-old refrigerated rice makes the best fried rice",
        ],
    },
    TipSet {
        topic: "chicken",
        tips: &[
            "Pat chicken dry before cooking for better browning and crispy skin",
            "Brine chicken for 30 minutes to 2 hours for juicier meat",
            "Use a meat thermometer - chicken is done at 165°F (74°C) internal temperature",
            "Let chicken rest for 5-10 minutes after cooking before cutting",
            "Pound chicken breasts to even thickness for uniform cooking",
        ],
    },
    TipSet {
        topic: "vegetables",
        tips: &[
            "Don't overcrowd the pan when roasting - vegetables need space to caramelize",
            "Salt vegetables after cooking, not before, to prevent them from releasing water",
            "Blanch green vegetables in salted water, then shock in ice water to keep color bright",
            "Cut vegetables uniformly for even cooking",
            "Save vegetable scraps to make homemade vegetable stock",
        ],
    },
    TipSet {
        topic: "seasoning",
        tips: &[
            "Season in layers throughout cooking, not just at the end",
            "Taste as you go and adjust seasoning accordingly",
            "Add salt to bring out flavors, acid (lemon/vinegar) to brighten them",
            "Toast whole spices before grinding for more intense flavor",
            "Add delicate herbs at the end, hardy herbs at the beginning",
        ],
    },
    TipSet {
        topic: "knife skills",
        tips: &[
            "Keep knives sharp - a sharp knife is safer than a dull one",
            "Use a proper cutting board (wood or plastic, not glass)",
            "Curl your fingers when holding food to protect fingertips",
            "Rock the knife forward and back, don't saw",
            "Clean and dry knives immediately after use",
        ],
    },
];
