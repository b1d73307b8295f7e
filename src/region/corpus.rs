//! Static word lists backing name and address synthesis

/// Given names shared by every region
pub const FIRST_NAMES: &[&str] = &[
    "Adam", "Alice", "Amelia", "Andrew", "Anna", "Benjamin", "Catherine", "Charles",
    "Daniel", "David", "Eleanor", "Elizabeth", "Emily", "Emma", "Ethan", "George",
    "Grace", "Hannah", "Henry", "Isabella", "Jack", "Jacob", "James", "John",
    "Joseph", "Julia", "Laura", "Liam", "Lucas", "Maria", "Martin", "Mary",
    "Matthew", "Michael", "Natalie", "Nicholas", "Noah", "Olivia", "Oscar", "Paul",
    "Peter", "Rachel", "Robert", "Samuel", "Sarah", "Sophia", "Thomas", "Victoria",
    "William", "Zoe",
];

/// Family names shared by every region
pub const LAST_NAMES: &[&str] = &[
    "Adams", "Allen", "Anderson", "Baker", "Brown", "Campbell", "Carter", "Clark",
    "Collins", "Davis", "Edwards", "Evans", "Garcia", "Green", "Hall", "Harris",
    "Hill", "Jackson", "Johnson", "Jones", "King", "Lee", "Lewis", "Martin",
    "Miller", "Mitchell", "Moore", "Morris", "Nelson", "Parker", "Phillips", "Roberts",
    "Robinson", "Scott", "Smith", "Stewart", "Taylor", "Thomas", "Thompson", "Turner",
    "Walker", "White", "Williams", "Wilson", "Wright", "Young",
];

pub const POLAND_CITIES: &[&str] = &[
    "Warszawa", "Kraków", "Łódź", "Wrocław", "Poznań", "Gdańsk", "Szczecin",
    "Bydgoszcz", "Lublin", "Białystok", "Katowice", "Gdynia", "Częstochowa",
    "Radom", "Toruń", "Rzeszów", "Kielce", "Olsztyn", "Opole", "Zielona Góra",
];

pub const POLAND_STREETS: &[&str] = &[
    "ul. Długa", "ul. Krótka", "ul. Polna", "ul. Leśna", "ul. Słoneczna",
    "ul. Ogrodowa", "ul. Lipowa", "ul. Szkolna", "ul. Kwiatowa", "ul. Kościelna",
    "ul. Mickiewicza", "ul. Kościuszki", "ul. Sienkiewicza", "ul. Piłsudskiego",
    "ul. Jana Pawła II", "ul. Wiejska", "ul. Zielona", "ul. Brzozowa",
];

pub const USA_CITIES: &[&str] = &[
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia",
    "San Antonio", "San Diego", "Dallas", "Austin", "Jacksonville", "Columbus",
    "Charlotte", "Indianapolis", "Seattle", "Denver", "Boston", "Nashville",
    "Portland", "Springfield",
];

pub const USA_STREETS: &[&str] = &[
    "Main Street", "Oak Avenue", "Maple Avenue", "Pine Street", "Cedar Lane",
    "Elm Street", "Washington Boulevard", "Lake Drive", "Hill Road", "Park Avenue",
    "Sunset Boulevard", "River Road", "Church Street", "Highland Avenue",
    "Lincoln Way", "Jefferson Street", "Walnut Street", "Chestnut Street",
];

pub const GEORGIA_CITIES: &[&str] = &[
    "Tbilisi", "Batumi", "Kutaisi", "Rustavi", "Zugdidi", "Gori", "Poti",
    "Samtredia", "Khashuri", "Senaki", "Zestaponi", "Marneuli", "Telavi",
    "Akhaltsikhe", "Ozurgeti", "Kobuleti", "Tskaltubo", "Borjomi",
];

pub const GEORGIA_STREETS: &[&str] = &[
    "Rustaveli Avenue", "Chavchavadze Avenue", "Aghmashenebeli Avenue",
    "Pekini Street", "Vazha-Pshavela Avenue", "Kostava Street", "Tsereteli Avenue",
    "Gorgasali Street", "Leselidze Street", "Abashidze Street", "Paliashvili Street",
    "Marjanishvili Street", "Tamar Mepe Avenue", "Gamsakhurdia Avenue",
];

pub const BANGLADESH_CITIES: &[&str] = &[
    "Dhaka", "Chittagong", "Khulna", "Rajshahi", "Sylhet", "Barisal", "Rangpur",
    "Comilla", "Mymensingh", "Narayanganj", "Gazipur", "Bogra", "Jessore",
    "Dinajpur", "Cox's Bazar", "Tangail",
];

pub const BANGLADESH_STREETS: &[&str] = &[
    "Mirpur Road", "Airport Road", "Satmasjid Road", "Green Road", "Elephant Road",
    "New Eskaton Road", "Gulshan Avenue", "Kemal Ataturk Avenue", "Shahid Tajuddin Sarani",
    "Begum Rokeya Sarani", "Station Road", "College Road", "Zindabahar Lane",
];

/// Pools used when the selected region is not in the catalog
pub const FALLBACK_CITIES: &[&str] = &[
    "Riverside", "Fairview", "Greenville", "Franklin", "Clinton", "Madison",
    "Georgetown", "Salem", "Bristol", "Arlington",
];

pub const FALLBACK_STREETS: &[&str] = &[
    "High Street", "Station Road", "Mill Lane", "Bridge Street", "Market Street",
    "School Lane", "Queen Street", "North Road",
];
