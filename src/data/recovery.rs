use crate::models::{Faq, RecoveryResource, ResourceCategory};

pub fn resources() -> Vec<RecoveryResource> {
    use ResourceCategory::*;
    [
        (
            1,
            Financial,
            "Disaster Assistance Application",
            "Federal Emergency Management Agency",
            "Apply for financial assistance for housing and essential needs after a disaster.",
            "1-800-621-3362",
            "Within 60 days of disaster declaration",
            "Affected residents in declared disaster areas",
        ),
        (
            2,
            Financial,
            "Small Business Disaster Loans",
            "Small Business Administration",
            "Low-interest loans to businesses, homeowners, and renters to repair or replace disaster-damaged property.",
            "1-800-659-2955",
            "Varies by disaster",
            "Business owners, homeowners, and renters in declared disaster areas",
        ),
        (
            3,
            Financial,
            "Disaster Unemployment Assistance",
            "Department of Labor",
            "Financial assistance to individuals who lost their jobs as a direct result of a major disaster.",
            "Contact state unemployment office",
            "30 days after announcement",
            "Workers who lost jobs due to disaster and don't qualify for regular unemployment",
        ),
        (
            4,
            Housing,
            "Transitional Sheltering Assistance",
            "Federal Emergency Management Agency",
            "Provides temporary housing in hotels or motels for eligible disaster survivors.",
            "1-800-621-3362",
            "Apply immediately after disaster",
            "Displaced individuals and families",
        ),
        (
            5,
            Housing,
            "Housing Repair Assistance",
            "Department of Housing and Urban Development",
            "Grants for home repairs not covered by insurance for low-income homeowners.",
            "1-800-569-4287",
            "Within 180 days of disaster",
            "Low-income homeowners with disaster damage",
        ),
        (
            6,
            Legal,
            "Disaster Legal Services",
            "American Bar Association",
            "Free legal assistance to low-income disaster survivors for insurance claims, home repair contracts, etc.",
            "1-800-985-5990",
            "None",
            "Low-income individuals affected by declared disasters",
        ),
        (
            7,
            MentalHealth,
            "Crisis Counseling Assistance",
            "Substance Abuse and Mental Health Services",
            "Free, confidential counseling services to help people recover from disaster-related distress.",
            "1-800-985-5990",
            "None",
            "Anyone affected by a disaster",
        ),
    ]
    .into_iter()
    .map(
        |(id, category, title, organization, description, phone, deadline, eligibility)| {
            RecoveryResource {
                id,
                category,
                title: title.into(),
                organization: organization.into(),
                description: description.into(),
                phone: phone.into(),
                deadline: deadline.into(),
                eligibility: eligibility.into(),
            }
        },
    )
    .collect()
}

pub fn recovery_faqs() -> Vec<Faq> {
    [
        (
            "How do I apply for FEMA assistance?",
            "You can apply for FEMA assistance online at DisasterAssistance.gov, by phone at 1-800-621-3362, or in person at a Disaster Recovery Center. You will need your Social Security number, address of the damaged property, description of the damage, insurance information, phone number, and bank account information for direct deposit.",
        ),
        (
            "What documents do I need for disaster assistance applications?",
            "Typically, you'll need proof of identity (driver's license, passport), proof of occupancy or ownership (deed, mortgage statement, utility bills), insurance information, and documentation of damage (photos, repair estimates). Having these documents ready will help speed up the application process.",
        ),
        (
            "How long does it take to receive disaster assistance?",
            "The timeline varies depending on the type of assistance and your specific situation. After applying, FEMA will inspect your property, typically within 7-10 days. Following inspection, you may receive initial funds within a week if approved. Other programs may take longer.",
        ),
        (
            "What if my home is uninhabitable due to a disaster?",
            "If your home is uninhabitable due to a disaster, you may be eligible for FEMA's Transitional Sheltering Assistance (hotel stays), rental assistance, or temporary housing units. Contact FEMA or visit a local Disaster Recovery Center to discuss your options.",
        ),
        (
            "Can I get help replacing lost important documents?",
            "Yes, you can get assistance replacing important documents lost in a disaster. Visit a Disaster Recovery Center for help with replacing driver's licenses, Social Security cards, birth certificates, tax records, and other important documents.",
        ),
        (
            "How do I handle insurance claims after a disaster?",
            "Contact your insurance company as soon as possible. Document all damage with photos and videos before cleaning up. Keep receipts for all repair work and temporary lodging. If you have difficulty with your claim, contact your state's insurance commissioner or seek free legal assistance through Disaster Legal Services.",
        ),
    ]
    .into_iter()
    .map(|(question, answer)| Faq {
        question: question.into(),
        answer: answer.into(),
    })
    .collect()
}
