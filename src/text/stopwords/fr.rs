pub(super) const WORDS: &[&str] = &[
    "a", "afin", "ai", "aie", "aient", "aies", "ait", "alors", "as", "au", "aucun", "aucune",
    "aupres", "auquel", "aura", "aurai", "auraient", "aurais", "aurait", "auras", "aurez",
    "auriez", "aurions", "aurons", "auront", "aussi", "autre", "autres", "aux", "auxquelles",
    "auxquels", "avaient", "avais", "avait", "avant", "avec", "avez", "aviez", "avions", "avoir",
    "avons", "ayant", "ayez", "ayons", "bien", "bientot", "c", "ca", "car", "ce", "ceci", "cela",
    "celle", "celles", "celui", "cependant", "ces", "cet", "cette", "ceux", "chacun", "chacune",
    "chaque", "chez", "ci", "comme", "comment", "d", "dans", "de", "dedans", "dehors", "depuis",
    "des", "desquelles", "desquels", "deja", "devant", "donc", "dont", "du", "duquel", "durant",
    "elle", "elles", "en", "encore", "entre", "es", "est", "et", "etaient", "etais", "etait",
    "etant", "ete", "etes", "etiez", "etions", "etre", "eu", "eue", "eues", "eurent", "eus",
    "eut", "eux", "fait", "faites", "fois", "font", "furent", "fus", "fut", "hors", "ici", "il",
    "ils", "j", "je", "jusqu", "jusque", "l", "la", "laquelle", "le", "lequel", "les",
    "lesquelles", "lesquels", "leur", "leurs", "lors", "lorsque", "lui", "m", "ma", "mais",
    "me", "meme", "memes", "mes", "moi", "mon", "n", "ne", "ni", "nos", "notre", "nous", "on",
    "ont", "or", "ou", "par", "parce", "pas", "peu", "peut", "plus", "plutot", "pour",
    "pourquoi", "puis", "qu", "quand", "que", "quel", "quelle", "quelles", "quels", "qui",
    "quoi", "s", "sa", "sans", "se", "sera", "serai", "seraient", "serais", "serait", "seras",
    "serez", "seriez", "serions", "serons", "seront", "ses", "si", "sien", "sienne", "siennes",
    "siens", "soi", "soient", "sois", "soit", "sommes", "son", "sont", "sous", "soyez",
    "soyons", "suis", "sur", "t", "ta", "tandis", "te", "tes", "toi", "ton", "tous", "tout",
    "toute", "toutes", "tres", "tu", "un", "une", "unes", "uns", "vers", "voici", "voila",
    "vos", "votre", "vous", "y",
];
