use super::{Category, Question};

const SDG_7: [Question; 9] = [
    Question {
        id: "7.1",
        name: "7.1 Number of awareness programs on rational energy use",
        options: [
            "0: No program in operation.",
            "1: Up to 2 programs in operation, reaching up to 100 people.",
            "2: 3-5 programs in operation, reaching 101-500 people.",
            "3: More than 5 programs in operation, reaching over 500 people.",
        ],
    },
    Question {
        id: "7.2",
        name: "7.2 Number of energy efficiency management programs",
        options: [
            "0: No program in operation.",
            "1: At least one program, resulting in up to 5% reduction in energy consumption.",
            "2: At least one program, resulting in a reduction greater than 5% and less than or equal to 10% in energy consumption.",
            "3: At least one program with energy consumption reductions exceeding 10%.",
        ],
    },
    Question {
        id: "7.3",
        name: "7.3 Number of technological innovation initiatives in energy efficiency",
        options: [
            "0: No initiative.",
            "1: Up to 2 technological initiatives implemented.",
            "2: 3-5 technological initiatives implemented.",
            "3: More than 5 initiatives implemented.",
        ],
    },
    Question {
        id: "7.4",
        name: "7.4 Percentage of renewable energy contracted and produced in port facilities",
        options: [
            "0: No use of renewable energy.",
            "1: Up to 10% of the energy used is renewable.",
            "2: More than 10% up to 50% of the energy used is renewable.",
            "3: More than 50% of the energy used is renewable.",
        ],
    },
    Question {
        id: "7.5",
        name: "7.5 Percentage of biofuels in electrical and mechanical loads",
        options: [
            "0: No use of biofuels.",
            "1: Less than 5% of the loads are operated with biofuels.",
            "2: 5% to 20% of the loads are operated with biofuels.",
            "3: More than 20% of the loads are operated with biofuels.",
        ],
    },
    Question {
        id: "7.6",
        name: "7.6 Number of technological innovation initiatives in renewable energy",
        options: [
            "0: No initiative.",
            "1: Up to 2 initiatives in the planning or pilot phase.",
            "2: 3-5 initiatives in the implementation phase with preliminary results.",
            "3: More than 5 initiatives in full operation with proven results.",
        ],
    },
    Question {
        id: "7.7",
        name: "7.7 Diversity of renewable energy sources in port facilities",
        options: [
            "0: No use of renewable sources.",
            "1: Use of 1 different type of renewable energy.",
            "2: Use of 2 different types of renewable energy.",
            "3: Use of 3 or more different types of renewable energy.",
        ],
    },
    Question {
        id: "7.8",
        name: "7.8 Number of partnerships for the promotion of clean energy",
        options: [
            "0: No partnership established.",
            "1: Up to 2 partnerships established with a focus on clean energy.",
            "2: 3-5 partnerships established with a focus on clean energy.",
            "3: More than 5 partnerships established with a focus on clean energy.",
        ],
    },
    Question {
        id: "7.9",
        name: "7.9 Number of charging stations for electric vehicles",
        options: [
            "0: No charging station available.",
            "1: Up to 5 charging stations available.",
            "2: 6-15 charging stations available.",
            "3: More than 15 charging stations available.",
        ],
    },
];

const SDG_13: [Question; 8] = [
    Question {
        id: "13.1",
        name: "13.1 Status of Climate Change Strategy Plan",
        options: [
            "0: No strategies.",
            "1: Strategy plan under development, no actions implemented.",
            "2: Strategy plan implemented, with some actions in practice.",
            "3: Fully operational strategy plan, with regular review and updates.",
        ],
    },
    Question {
        id: "13.2",
        name: "13.2 Emissions Inventory",
        options: [
            "0: Emissions inventory not carried out.",
            "1: Emissions inventory conducted, but outdated.",
            "2: Emissions inventory conducted, updated more than a year ago.",
            "3: Emissions inventory updated annually and actively used for emissions management.",
        ],
    },
    Question {
        id: "13.3",
        name: "13.3 Carbon Credit Management Program",
        options: [
            "0: No Carbon Credit Program.",
            "1: Program in initial phase, without credits generated or purchased.",
            "2: Active program, with carbon credits being generated or purchased.",
            "3: Well-established program, with carbon credits being actively managed.",
        ],
    },
    Question {
        id: "13.4",
        name: "13.4 Climate Monitoring Program",
        options: [
            "0: Non-existent program.",
            "1: Program in implementation phase.",
            "2: Program implemented, but data used in a limited way.",
            "3: Program implemented and integrated into a climate response and planning system.",
        ],
    },
    Question {
        id: "13.5",
        name: "13.5 Number of Collaborations and Partnerships for Climate Action",
        options: [
            "0: No collaboration or partnership established.",
            "1: Up to 2 collaborations or partnerships established.",
            "2: 3-5 collaborations or partnerships with initial results.",
            "3: More than 5 collaborations or partnerships with significant and measurable impact on climate action.",
        ],
    },
    Question {
        id: "13.6",
        name: "13.6 Climate-Resilient Infrastructure",
        options: [
            "0: No infrastructure assessed as climate resilient.",
            "1: Less than 25% of infrastructure assessed as climate resilient.",
            "2: 25-50% of infrastructure assessed as climate resilient.",
            "3: More than 50% of infrastructure assessed as climate-resilient and adapted.",
        ],
    },
    Question {
        id: "13.7",
        name: "13.7 Cargo Traffic Efficiency Index",
        options: [
            "0: Index not calculated.",
            "1: Efficiency index below the industry average.",
            "2: Efficiency index at the industry average.",
            "3: Efficiency index above the industry average, with continuous improvements.",
        ],
    },
    Question {
        id: "13.8",
        name: "13.8 Percentage Reduction of Emissions Through New Technology Implementation",
        options: [
            "0: No emission reduction programs.",
            "1: Less than 5% reduction in emissions through new technologies.",
            "2: 5-10% reduction in emissions through new technologies.",
            "3: More than 10% reduction in emissions through new technologies.",
        ],
    },
];

pub(super) static CATEGORIES: [Category; 2] = [
    Category {
        name: "SDG 7",
        title: "Affordable and clean energy",
        questions: &SDG_7,
    },
    Category {
        name: "SDG 13",
        title: "Climate action",
        questions: &SDG_13,
    },
];
