use crate::models::{CalculatorInfo, Category};

/// Every calculator on the site, in listing order.
pub(super) const CALCULATORS: &[CalculatorInfo] = &[
    // Ekonomi
    CalculatorInfo::new(
        "loan",
        "Lånekalkylator",
        "Räkna ut månadskostnad och total kostnad för ett privatlån.",
        "/lanekalkylator",
        Category::Ekonomi,
    ),
    CalculatorInfo::new(
        "compound-interest",
        "Ränta på ränta",
        "Se hur ditt sparande växer med månadssparande och ränta på ränta.",
        "/ranta-pa-ranta",
        Category::Ekonomi,
    ),
    CalculatorInfo::new(
        "salary",
        "Lön efter skatt",
        "Beräkna nettolön utifrån bruttolön och kommunalskatt.",
        "/lonekalkylator",
        Category::Ekonomi,
    ),
    CalculatorInfo::new(
        "vat",
        "Momskalkylator",
        "Räkna fram och tillbaka mellan pris med och utan moms.",
        "/momskalkylator",
        Category::Ekonomi,
    ),
    CalculatorInfo::new(
        "mortgage",
        "Bolånekalkylator",
        "Månadskostnad för bolån med amortering och ränteavdrag.",
        "/bolanekalkylator",
        Category::Ekonomi,
    )
    .premium(),
    CalculatorInfo::new(
        "savings-goal",
        "Sparmål",
        "Hur mycket behöver du spara varje månad för att nå ditt mål?",
        "/sparmal",
        Category::Ekonomi,
    ),
    CalculatorInfo::new(
        "inflation",
        "Inflationskalkylator",
        "Se vad ett belopp är värt efter några års inflation.",
        "/inflationskalkylator",
        Category::Ekonomi,
    ),
    CalculatorInfo::new(
        "budget",
        "Budgetkalkylator",
        "Summera inkomster och utgifter och se vad som blir kvar.",
        "/budgetkalkylator",
        Category::Ekonomi,
    )
    .premium(),
    CalculatorInfo::new(
        "car-cost",
        "Bilkostnad",
        "Vad kostar bilen per mil och per månad?",
        "/bilkostnad",
        Category::Ekonomi,
    )
    .premium(),
    CalculatorInfo::new(
        "electricity",
        "Elkostnad",
        "Räkna ut vad en apparat kostar att driva per år.",
        "/elkostnad",
        Category::Ekonomi,
    ),
    CalculatorInfo::new(
        "pension",
        "Pensionskalkylator",
        "Uppskatta din framtida pension utifrån lön och sparande.",
        "/pensionskalkylator",
        Category::Ekonomi,
    )
    .premium(),
    // Hälsa
    CalculatorInfo::new(
        "bmi",
        "BMI-kalkylator",
        "Räkna ut ditt BMI utifrån vikt och längd.",
        "/bmikalkylator",
        Category::Halsa,
    ),
    CalculatorInfo::new(
        "calories",
        "Kalorikalkylator",
        "Uppskatta ditt dagliga kaloribehov.",
        "/kalorikalkylator",
        Category::Halsa,
    ),
    CalculatorInfo::new(
        "bmr",
        "BMR-kalkylator",
        "Beräkna din basalmetabolism.",
        "/bmrkalkylator",
        Category::Halsa,
    ),
    CalculatorInfo::new(
        "water",
        "Vattenintag",
        "Hur mycket vatten behöver du dricka per dag?",
        "/vattenintag",
        Category::Halsa,
    ),
    CalculatorInfo::new(
        "body-fat",
        "Kroppsfett",
        "Uppskatta din kroppsfettprocent med midjemåttet.",
        "/kroppsfett",
        Category::Halsa,
    )
    .premium(),
    CalculatorInfo::new(
        "running-pace",
        "Löpartempo",
        "Räkna om mellan tempo, distans och sluttid.",
        "/lopartempo",
        Category::Halsa,
    ),
    CalculatorInfo::new(
        "alcohol",
        "Promillekalkylator",
        "Uppskatta din promillehalt efter ett antal standardglas.",
        "/promillekalkylator",
        Category::Halsa,
    ),
    CalculatorInfo::new(
        "pregnancy",
        "Graviditetskalkylator",
        "Beräkna beräknat förlossningsdatum och graviditetsvecka.",
        "/graviditetskalkylator",
        Category::Halsa,
    ),
    // Tid
    CalculatorInfo::new(
        "fasting",
        "Fastekalkylator",
        "Håll koll på din periodiska fasta med en nedräknare.",
        "/fastekalkylator",
        Category::Tid,
    ),
    CalculatorInfo::new(
        "sleep",
        "Sömnkalkylator",
        "Hitta rätt läggdags utifrån sömncykler på 90 minuter.",
        "/somnkalkylator",
        Category::Tid,
    ),
    CalculatorInfo::new(
        "age",
        "Ålderskalkylator",
        "Räkna ut exakt ålder i år, månader och dagar.",
        "/alderskalkylator",
        Category::Tid,
    ),
    CalculatorInfo::new(
        "days-between",
        "Dagar mellan datum",
        "Antal dagar, veckor och arbetsdagar mellan två datum.",
        "/dagar-mellan-datum",
        Category::Tid,
    ),
    CalculatorInfo::new(
        "countdown",
        "Nedräkning",
        "Räkna ner till ett datum och klockslag.",
        "/nedrakning",
        Category::Tid,
    ),
    CalculatorInfo::new(
        "work-hours",
        "Arbetstid",
        "Summera arbetade timmar med raster.",
        "/arbetstid",
        Category::Tid,
    ),
    // Matematik
    CalculatorInfo::new(
        "percent",
        "Procenträknare",
        "Räkna procent, procentenheter och förändring.",
        "/procentraknare",
        Category::Matematik,
    ),
    CalculatorInfo::new(
        "fraction",
        "Bråkräknare",
        "Addera, subtrahera, multiplicera och dividera bråk.",
        "/brakraknare",
        Category::Matematik,
    ),
    CalculatorInfo::new(
        "unit-converter",
        "Enhetsomvandlare",
        "Omvandla mellan längd, vikt och volym.",
        "/enhetsomvandlare",
        Category::Matematik,
    ),
    // Vardag
    CalculatorInfo::new(
        "fuel",
        "Bränsleförbrukning",
        "Räkna ut förbrukning per mil och kostnad för resan.",
        "/bransleforbrukning",
        Category::Vardag,
    ),
    CalculatorInfo::new(
        "paint",
        "Färgkalkylator",
        "Hur många liter färg går det åt till rummet?",
        "/fargkalkylator",
        Category::Vardag,
    ),
    CalculatorInfo::new(
        "tip",
        "Dricksräknare",
        "Dela notan och räkna ut dricks per person.",
        "/dricksraknare",
        Category::Vardag,
    ),
];
