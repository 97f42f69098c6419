use yew::{function_component, Html};

#[function_component]
pub fn Features() -> Html {
    super::article(
        "Features",
        &[
            ("PDF Conversion", "Turn PDFs into Word, Excel, PowerPoint, images, HTML, text or EPUB, and bring those formats back to PDF."),
            ("PDF Merging & Splitting", "Combine several documents into one, or break a document into single pages."),
            ("PDF Compression", "Shrink documents for email and the web while keeping them readable."),
            ("PDF Security", "Protect documents with a password and choose what readers are allowed to do."),
            ("Watermarks", "Stamp text on every page, with your own position, opacity, rotation, size and colour."),
        ],
    )
}

#[function_component]
pub fn Faq() -> Html {
    super::article(
        "Frequently Asked Questions",
        &[
            ("What is PDFVille?", "An online toolbox to convert, merge, split, compress and protect PDF files from the browser."),
            ("Is PDFVille free to use?", "The Basic plan is free with limited usage, Premium lifts the limits."),
            ("How secure are my documents?", "Files travel over HTTPS and are removed from our servers once processed."),
            ("What file formats can I convert to PDF?", "Images (JPG, PNG), Word, Excel, PowerPoint, HTML and EPUB."),
            ("How do I merge multiple PDFs?", "Open the merge tool, drop two files or more, reorder by removing and adding, then press merge."),
        ],
    )
}

#[function_component]
pub fn PrivacyPolicy() -> Html {
    super::article(
        "Privacy Policy",
        &[
            ("Scope and Purpose", "This policy explains what we collect when you use PDFVille and what we do with it."),
            ("Personal Information We Collect", "Your email address when you sign up or pay, and the files you upload for processing."),
            ("Cookies", "We only keep what is needed to remember your session, see the cookies policy."),
            ("Data Retention", "Uploaded files are deleted after processing. Account data is kept while your account exists."),
            ("Third-Party Services", "Payments are handled by Stripe, which receives the details needed to charge you."),
            ("Your Legal Rights", "You can ask for a copy or the deletion of your data at any time."),
            ("Contact Us", "Questions about privacy can be sent to support@pdfville.com."),
        ],
    )
}

#[function_component]
pub fn Security() -> Html {
    super::article(
        "Security",
        &[
            ("Data Encryption", "Every transfer between your browser and our servers is encrypted with TLS."),
            ("File Privacy", "Files are processed automatically, nobody looks at them, and they are deleted afterwards."),
            ("Account Security", "Sessions rely on a token kept in your browser, logging out removes it."),
            ("Payments", "Card details never reach our servers, checkout happens on Stripe's own pages."),
            ("Contact Us", "Report a vulnerability at security@pdfville.com."),
        ],
    )
}

#[function_component]
pub fn Cookies() -> Html {
    super::article(
        "Cookies Policy",
        &[
            ("What are cookies?", "Small pieces of data a website stores in your browser."),
            ("How we use cookies", "To keep you signed in and to remember the state of a checkout."),
            ("Types of cookies we use", "Strictly necessary storage only, no advertising cookies."),
            ("How to manage cookies", "Your browser settings let you inspect and delete stored data at any time."),
        ],
    )
}
