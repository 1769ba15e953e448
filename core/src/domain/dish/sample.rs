/// Menu text offered to first-time users so the studio can be tried without typing a menu.
pub const SAMPLE_MENU: &str = "Appetizers:
- Truffle Arancini: Crispy risotto balls infused with black truffle oil, served with garlic aioli.
- Burrata & Peach Salad: Fresh burrata cheese, grilled peaches, arugula, and balsamic glaze.

Main Courses:
- Pan-Seared Scallops: Jumbo scallops with cauliflower purée and crispy pancetta.
- Wild Mushroom Risotto: Arborio rice cooked with porcini mushrooms, parmesan, and fresh herbs.

Desserts:
- Dark Chocolate Fondant: Molten center chocolate cake with vanilla bean ice cream.";
