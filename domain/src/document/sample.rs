//! Built-in sample agreement
//!
//! A short Indian consulting agreement used by `--sample` and by tests that
//! exercise the full pipeline.

/// Consulting agreement between Rogue Company Pvt. Ltd. and Prerna
pub const SAMPLE_AGREEMENT: &str = r#"
AGREEMENT FOR CONSULTING SERVICES

This Agreement is made and entered into as of October 1, 2025, (the "Effective Date"), by and between Rogue Company Pvt. Ltd., a company registered in India ("Company"), and Prerna, an individual residing in Lucknow, Uttar Pradesh ("Consultant").

WHEREAS, Company desires to engage Consultant to provide certain services in the field of artificial intelligence; and
WHEREAS, Consultant has expertise in this field and desires to provide such services to Company;

NOW, THEREFORE, the parties agree as follows:

1. Services. Consultant shall perform services related to AI strategy and model development (the "Services"). Consultant shall report to the Chief Technology Officer.

2. Term. This Agreement shall commence on the Effective Date and shall continue for a period of six (6) months, unless terminated earlier as provided herein.

3. Compensation. Company shall pay Consultant a fee of ₹12,000 per hour for Services. Consultant shall submit invoices monthly. Payment shall be made within 30 days of receipt of invoice.

4. Confidentiality. Consultant agrees to keep all Company information ("Confidential Information") strictly confidential. Confidential Information includes all proprietary data, trade secrets, and business plans. This obligation shall survive the termination of this Agreement for a period of five (5) years.

5. Termination. Either party may terminate this Agreement upon thirty (30) days written notice to the other party. Company may terminate this Agreement immediately for cause.

6. Governing Law. This Agreement shall be governed by and construed in accordance with the laws of the State of Uttar Pradesh, India.

IN WITNESS WHEREOF, the parties have executed this Agreement as of the Effective Date.

Company: Rogue Company Pvt. Ltd.
Consultant: Prerna
"#;
