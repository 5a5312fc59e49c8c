//! Word lists used by the built-in generators.

pub const FIRST_NAMES_MEN: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark", "Donald", "Steven", "Paul",
    "Andrew", "Joshua", "Kenneth", "Kevin", "Brian", "George", "Timothy", "Ronald", "Edward",
    "Jason", "Jeffrey", "Ryan", "Jacob", "Gary", "Nicholas", "Eric", "Jonathan", "Stephen",
    "Larry", "Justin", "Scott", "Brandon", "Benjamin", "Samuel", "Gregory", "Alexander", "Frank",
    "Patrick", "Raymond", "Jack", "Dennis", "Jerry",
];

pub const FIRST_NAMES_WOMEN: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica", "Sarah",
    "Karen", "Lisa", "Nancy", "Betty", "Margaret", "Sandra", "Ashley", "Kimberly", "Emily",
    "Donna", "Michelle", "Carol", "Amanda", "Dorothy", "Melissa", "Deborah", "Stephanie",
    "Rebecca", "Sharon", "Laura", "Cynthia", "Kathleen", "Amy", "Angela", "Shirley", "Anna",
    "Brenda", "Pamela", "Emma", "Nicole", "Helen", "Samantha", "Katherine", "Christine",
    "Debra", "Rachel", "Carolyn", "Janet", "Catherine", "Maria", "Heather",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall",
    "Rivera", "Campbell", "Mitchell", "Carter", "Roberts", "Gomez", "Phillips", "Evans",
    "Turner", "Diaz", "Parker", "Cruz", "Edwards", "Collins", "Reyes", "Stewart", "Morris",
    "Morales", "Murphy", "Cook", "Rogers", "Gutierrez", "Ortiz", "Morgan", "Cooper", "Peterson",
    "Bailey", "Reed", "Kelly", "Howard", "Ramos", "Kim", "Cox", "Ward", "Richardson",
];

pub const WORDS: &[&str] = &[
    "account", "action", "active", "address", "advance", "agency", "agent", "amount", "answer",
    "anchor", "apple", "archive", "area", "argument", "arrow", "asset", "autumn", "balance",
    "basket", "beacon", "border", "branch", "bridge", "bright", "budget", "button", "cabin",
    "camera", "canvas", "carbon", "castle", "center", "chance", "channel", "circle", "climate",
    "cloud", "coast", "collar", "column", "comfort", "copper", "corner", "cotton", "credit",
    "crystal", "current", "cycle", "dawn", "debate", "delta", "desert", "detail", "device",
    "diamond", "digital", "distance", "domain", "dragon", "driver", "eagle", "echo", "editor",
    "effort", "element", "energy", "engine", "event", "fabric", "factor", "falcon", "feather",
    "field", "filter", "flame", "forest", "format", "fortune", "frame", "garden", "gateway",
    "glacier", "global", "granite", "gravity", "harbor", "harvest", "horizon", "island",
    "jacket", "journal", "jungle", "kernel", "ladder", "lantern", "layer", "ledger", "legend",
    "lemon", "letter", "linen", "market", "meadow", "memory", "method", "mirror", "module",
    "motion", "mountain", "network", "number", "object", "ocean", "office", "option", "orbit",
    "orchard", "palace", "panel", "parcel", "pattern", "pebble", "pepper", "planet", "pocket",
    "portal", "prairie", "project", "quartz", "rabbit", "record", "region", "report", "ribbon",
    "river", "rocket", "saddle", "sample", "season", "signal", "silver", "source", "spring",
    "station", "stream", "summit", "symbol", "system", "talent", "thunder", "timber", "token",
    "tower", "travel", "valley", "vector", "velvet", "venture", "village", "voyage", "wander",
    "window", "winter", "yellow", "zenith",
];
